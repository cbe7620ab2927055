//! Randomized algorithms
//!
//! Every algorithm takes its engine explicitly. Callers without one can
//! borrow the thread's default engine through [`with_default_engine`], a
//! xoshiro256++ generator seeded from OS entropy on first use or fixed with
//! [`seed_default_engine`].

use std::cell::RefCell;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

use crate::cursor::{
    distance, next_to, Boundary, ForwardCursor, OutputCursor, Permutable, RandomAccessCursor,
};
use crate::results::InOut;

thread_local! {
    static DEFAULT_ENGINE: RefCell<Option<Xoshiro256PlusPlus>> = const { RefCell::new(None) };
}

/// Run `f` with this thread's default engine.
///
/// # Panics
///
/// If `f` itself calls `with_default_engine` or [`seed_default_engine`].
pub fn with_default_engine<T, F>(f: F) -> T
where
    F: FnOnce(&mut Xoshiro256PlusPlus) -> T,
{
    DEFAULT_ENGINE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let engine = slot.get_or_insert_with(|| {
            debug!("seeding default engine from entropy");
            Xoshiro256PlusPlus::seed_from_u64(rand::random())
        });
        f(engine)
    })
}

/// Reset this thread's default engine to a fixed state.
pub fn seed_default_engine(seed: u64) {
    DEFAULT_ENGINE.with(|slot| {
        *slot.borrow_mut() = Some(Xoshiro256PlusPlus::seed_from_u64(seed));
    });
}

/// Uniformly permute `[first, last)` (Fisher-Yates). Returns the end cursor.
pub fn shuffle<S, C, B, G>(seq: &mut S, first: C, last: B, rng: &mut G) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
    G: Rng + ?Sized,
{
    let end = next_to(seq, first.clone(), &last);
    let n = end.offset_from(seq, &first);
    let mut back = end.clone();
    for i in (1..n).rev() {
        back.step_back(seq);
        let j = rng.gen_range(0..=i);
        let mut pick = first.clone();
        pick.jump(seq, j);
        back.swap_with(seq, &pick);
    }
    end
}

/// [`shuffle`] with the thread's default engine.
pub fn shuffle_default<S, C, B>(seq: &mut S, first: C, last: B) -> C
where
    S: ?Sized,
    C: RandomAccessCursor<S> + Permutable<S>,
    B: Boundary<C>,
{
    with_default_engine(|rng| shuffle(seq, first, last, rng))
}

/// Clone `n` elements chosen uniformly from `[first, last)` into `out`,
/// keeping their relative order (selection sampling). Copies everything
/// when the range holds fewer than `n` elements.
///
/// Returns where reading stopped, which is just past the last chosen
/// element.
pub fn sample<S, C, B, D, O, G>(
    seq: &S,
    mut first: C,
    last: B,
    dst: &mut D,
    mut out: O,
    n: usize,
    rng: &mut G,
) -> InOut<C, O>
where
    S: ?Sized,
    C: ForwardCursor<S>,
    C::Item: Clone,
    B: Boundary<C>,
    D: ?Sized,
    O: OutputCursor<D, C::Item>,
    G: Rng + ?Sized,
{
    let mut unseen = distance(seq, first.clone(), &last) as usize;
    let mut wanted = n.min(unseen);
    while wanted > 0 {
        if rng.gen_range(0..unseen) < wanted {
            out.put(dst, first.read(seq).clone());
            wanted -= 1;
        }
        unseen -= 1;
        first.step(seq);
    }
    InOut { input: first, out }
}
