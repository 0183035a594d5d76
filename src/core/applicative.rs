// =============================================================================
// APPLICATIVE — Fonctions emballées appliquées à des valeurs emballées
// =============================================================================
//
// En plus de `fmap`, un Applicative sait :
//   pure  : A → F<A>                       (le contexte "réussi" par défaut)
//   apply : F<A → B> × F<A> → F<B>         (court-circuite selon l'instance)
//
// `fmap` se dérive de ces deux-là : fmap(x, f) == apply(pure(f), x).
// C'est `lift_a`, fourni par défaut.
//
// LOIS :
//   Identité       : apply(pure(id), v)            == v
//   Homomorphisme  : apply(pure(f), pure(x))       == pure(f(x))
//   Échange        : apply(u, pure(y))             == apply(pure(|f| f(y)), u)
//   Composition    : apply(apply(apply(pure(∘), u), v), w) == apply(u, apply(v, w))
//
// =============================================================================

use super::functor::Functor;

/// Capacité Applicative.
pub trait Applicative: Functor {
    /// Place une valeur dans le contexte par défaut.
    fn pure<A>(value: A) -> Self::Of<A>;

    /// Applique une fonction emballée à une valeur emballée.
    fn apply<A, B, F>(ff: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        F: FnOnce(A) -> B;

    /// `fmap` exprimé uniquement avec `pure` et `apply`.
    fn lift_a<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::apply::<A, B, F>(Self::pure::<F>(f), fa)
    }
}
