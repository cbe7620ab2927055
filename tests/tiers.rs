mod common;

use common::{rotate_via, sort_via, stable_sort_via, tagged, Access};
use cursorkit::cursor::{
    tier_of, BidirectionalOnly, ForwardList, ForwardOnly, InputOnly, ListCursor, Pos,
};
use cursorkit::relation::by_key;
use cursorkit::{counted, is_partitioned, partition, reverse, Counted, Greater, Less, Tier};
use test_case::test_case;

#[test_case(Access::RandomAccess ; "random access")]
#[test_case(Access::Bidirectional ; "bidirectional")]
#[test_case(Access::Forward ; "forward")]
#[test_case(Access::List ; "forward list")]
fn sort_scenario(access: Access) {
    assert_eq!(sort_via(access, &[5, 3, 3, 1, 4], Less), vec![1, 3, 3, 4, 5]);
    assert_eq!(sort_via(access, &[5, 3, 3, 1, 4], Greater), vec![5, 4, 3, 3, 1]);
    assert_eq!(sort_via::<i32, _>(access, &[], Less), Vec::<i32>::new());
    assert_eq!(sort_via(access, &[9], Less), vec![9]);
}

#[test_case(Access::RandomAccess ; "random access")]
#[test_case(Access::Bidirectional ; "bidirectional")]
#[test_case(Access::Forward ; "forward")]
#[test_case(Access::List ; "forward list")]
fn stable_sort_of_records(access: Access) {
    let input = tagged(&[3, 1, 3, 0, 1, 3, 2, 0]);
    let out = stable_sort_via(access, &input, by_key(|p: &(u8, usize)| p.0));
    let order: Vec<usize> = out.iter().map(|p| p.1).collect();
    assert_eq!(order, vec![3, 7, 1, 4, 6, 0, 2, 5]);
}

#[test_case(Access::RandomAccess, 2 ; "random access by two")]
#[test_case(Access::Bidirectional, 2 ; "bidirectional by two")]
#[test_case(Access::Bidirectional, 4 ; "bidirectional single right element")]
#[test_case(Access::Forward, 2 ; "forward by two")]
#[test_case(Access::Forward, 1 ; "forward single left element")]
#[test_case(Access::List, 3 ; "list by three")]
fn rotate_scenario(access: Access, k: usize) {
    let input = [1, 2, 3, 4, 5];
    let mut expected = input.to_vec();
    expected.rotate_left(k);
    assert_eq!(rotate_via(access, &input, k), expected);
}

#[test_case(0 ; "empty left half")]
#[test_case(3 ; "equal halves")]
#[test_case(6 ; "empty right half")]
#[test_case(4 ; "gcd of two")]
fn gcd_rotation_edges(k: usize) {
    let input: Vec<u8> = (0..6).collect();
    let rotated = rotate_via(Access::RandomAccess, &input, k);
    let mut expected = input.clone();
    expected.rotate_left(k);
    assert_eq!(rotated, expected);
}

#[test_case(Tier::RandomAccess ; "random access")]
#[test_case(Tier::Bidirectional ; "bidirectional")]
#[test_case(Tier::Forward ; "forward")]
fn partition_scenario(tier: Tier) {
    let mut v: Vec<i32> = (1..=10).collect();
    let n = v.len();
    let is_odd = |x: &i32| x % 2 != 0;
    let split = match tier {
        Tier::RandomAccess => partition(&mut v[..], Pos(0), Pos(n), is_odd).0,
        Tier::Bidirectional => {
            partition(&mut v[..], BidirectionalOnly(Pos(0)), BidirectionalOnly(Pos(n)), is_odd).0 .0
        }
        _ => partition(&mut v[..], ForwardOnly(Pos(0)), ForwardOnly(Pos(n)), is_odd).0 .0,
    };
    assert_eq!(split, 5);
    assert!(is_partitioned(&v[..], Pos(0), Pos(n), is_odd));
}

#[test_case(Tier::RandomAccess ; "random access")]
#[test_case(Tier::Bidirectional ; "bidirectional")]
fn reverse_scenario(tier: Tier) {
    for len in 0..6 {
        let mut v: Vec<usize> = (0..len).collect();
        let end = match tier {
            Tier::RandomAccess => reverse(&mut v[..], Pos(0), Pos(len)).0,
            _ => reverse(&mut v[..], BidirectionalOnly(Pos(0)), BidirectionalOnly(Pos(len))).0 .0,
        };
        assert_eq!(end, len);
        assert_eq!(v, (0..len).rev().collect::<Vec<_>>());
    }
}

#[test]
fn tiers_are_reported_per_cursor() {
    assert_eq!(tier_of::<[u8], Pos>(), Tier::RandomAccess);
    assert_eq!(tier_of::<[u8], BidirectionalOnly<Pos>>(), Tier::Bidirectional);
    assert_eq!(tier_of::<[u8], ForwardOnly<Pos>>(), Tier::Forward);
    assert_eq!(tier_of::<[u8], InputOnly<Pos>>(), Tier::Input);
    assert_eq!(tier_of::<ForwardList<u8>, ListCursor>(), Tier::Forward);
    assert_eq!(tier_of::<[u8], Counted<Pos>>(), Tier::RandomAccess);
    assert_eq!(tier_of::<ForwardList<u8>, Counted<ListCursor>>(), Tier::Forward);
}

#[test]
fn counted_ranges_partition_a_list_prefix() {
    let mut list: ForwardList<i32> = [4, 7, 1, 8, 5, 6].into_iter().collect();
    let (first, end) = counted(list.begin(), 4);
    let split = partition(&mut list, first, end, |x: &i32| *x < 5);
    assert_eq!(split.count(), 2);
    let v = list.to_vec();
    assert_eq!(&v[4..], &[5, 6]);
    let mut prefix = v[..2].to_vec();
    prefix.sort();
    assert_eq!(prefix, vec![1, 4]);
}
