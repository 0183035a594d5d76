// =============================================================================
// MONADES — Functor, Applicative, Monad et MonadPlus en Rust
// =============================================================================
//
// Une petite algèbre typée pour séquencer des calculs qui peuvent échouer.
//
// Architecture :
//   core/     → la hiérarchie de capacités, les combinateurs et Maybe
//   error     → l'unique erreur d'usage (curryfication à arité dynamique)
//
// Concepts fondamentaux :
//   Functor     = on peut appliquer une fonction "dedans" (fmap)
//   Applicative = on peut emballer une valeur (pure) et appliquer une
//                 fonction emballée (apply)
//   Monad       = on peut enchaîner des calculs dépendants (bind)
//   MonadPlus   = on a un zéro et une combinaison (zero, plus)
//   Maybe       = Just(v) ou Nothing ; Nothing court-circuite toute la chaîne
//
// EXEMPLE :
//   Just(3).map(|x| x + 20).map(|x| x * 4)      == Just(92)
//   Just(5).bind(|x| safe_div(x, 0))            == Nothing
//
// =============================================================================

pub mod core;
pub mod error;

pub use crate::core::applicative::Applicative;
pub use crate::core::combinators::{
    compose, curry2, curry3, flip, identity, partial, uncurry2, Applied, Curried,
};
pub use crate::core::functor::Functor;
pub use crate::core::kind::Kind;
pub use crate::core::laws::{Law, LawViolation};
pub use crate::core::maybe::{Just, Maybe, MaybeKind, Nothing};
pub use crate::core::monad::Monad;
pub use crate::core::monad_plus::MonadPlus;
pub use crate::error::{Error, Result};
