// =============================================================================
// KIND — Émulation des types d'ordre supérieur
// =============================================================================
//
// Rust n'a pas de "type constructeur" de première classe (pas de `F<_>`).
// On le simule avec un type MARQUEUR qui porte une famille de types :
//
//   struct MaybeKind;
//   impl Kind for MaybeKind { type Of<T> = Maybe<T>; }
//
// `MaybeKind` joue le rôle de `Maybe` (sans argument), et
// `<MaybeKind as Kind>::Of<i32>` est `Maybe<i32>`.
//
// Les capacités (Functor, Applicative, Monad, MonadPlus) sont implémentées
// sur le marqueur : c'est ce qui permet d'écrire une seule fois les
// opérations dérivées (lift_m, ap, join, sequence...) pour TOUTE monade.
//
// =============================================================================

/// Un constructeur de types à un paramètre.
pub trait Kind {
    /// Le type obtenu en appliquant le constructeur à `T`
    type Of<T>;
}
