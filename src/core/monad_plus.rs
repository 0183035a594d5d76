// =============================================================================
// MONADPLUS — Une monade avec un zéro et une combinaison
// =============================================================================
//
//   zero : M<A>                      (élément vide, absorbant pour bind)
//   plus : M<A> × M<A> → M<A>        (combinaison associative)
//
// LOIS :
//   bind(zero, f)   == zero
//   seq(m, zero)    == zero
//   plus(plus(a, b), c) == plus(a, plus(b, c))
//
// Pour Maybe, `plus` est biaisé à gauche : le premier Just gagne.
//
// =============================================================================

use super::monad::Monad;

/// Capacité MonadPlus.
pub trait MonadPlus: Monad {
    /// L'élément vide.
    fn zero<A>() -> Self::Of<A>;

    /// Combine deux calculs.
    fn plus<A>(left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A>;

    /// Combine une suite de calculs avec `plus`, en partant de `zero`.
    fn msum<A, I>(items: I) -> Self::Of<A>
    where
        I: IntoIterator<Item = Self::Of<A>>,
    {
        items
            .into_iter()
            .fold(Self::zero::<A>(), |acc, m| Self::plus::<A>(acc, m))
    }
}
