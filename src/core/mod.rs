// =============================================================================
// CORE — La hiérarchie algébrique et son instance Maybe
// =============================================================================
//
// Tout est pur : aucune I/O, aucun état partagé, aucune concurrence.
// Chaque opération transforme des valeurs immuables et rend la main.
//
// Architecture (des feuilles vers le haut) :
//   combinators  → identity, compose, flip, curry, application partielle
//   kind         → émulation des types d'ordre supérieur (F<_>)
//   functor      → fmap
//   applicative  → pure, apply (+ lift_a = fmap dérivé)
//   monad        → unit, bind (+ lift_m, lift_m2, ap, seq, join, sequence)
//   monad_plus   → zero, plus (+ msum)
//   maybe        → Just / Nothing, instance de tout ce qui précède
//   laws         → vérification exécutable des lois
//
// =============================================================================

pub mod combinators;
pub mod kind;
pub mod functor;
pub mod applicative;
pub mod monad;
pub mod monad_plus;
pub mod maybe;
pub mod laws;
