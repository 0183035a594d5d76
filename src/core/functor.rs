// =============================================================================
// FUNCTOR — Appliquer une fonction "à l'intérieur" d'un contexte
// =============================================================================
//
// Un Functor F expose une seule opération :
//   fmap : F<A> × (A → B) → F<B>
//
// LOIS (vérifiables avec `core::laws`, pas imposées par le système de types) :
//   1. Identité     : fmap(x, id)         == x
//   2. Composition  : fmap(x, f ∘ g)      == fmap(fmap(x, g), f)
//
// =============================================================================

use super::kind::Kind;

/// Capacité Functor.
pub trait Functor: Kind {
    /// Applique `f` à la valeur contenue, en préservant la structure.
    fn fmap<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> B;
}
