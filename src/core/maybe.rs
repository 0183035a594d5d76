// =============================================================================
// MAYBE — Une valeur présente (Just) ou absente (Nothing)
// =============================================================================
//
// Maybe<T> est une union à exactement deux cas :
//   - Just(v)  : contient exactement une valeur
//   - Nothing  : ne contient rien (l'unique état d'échec, sans message)
//
// Aucune opération ne modifie une valeur existante : chaque opération
// renvoie un NOUVEAU Maybe. Les deux états sont terminaux.
//
// TABLE DES OPÉRATIONS :
//
//   opération        | Just(v)               | Nothing
//   -----------------+-----------------------+-----------
//   map(f)           | Just(f(v))            | Nothing
//   apply(fa)        | Just(f(x)) si fa=Just(x), sinon Nothing | Nothing
//   bind(f)          | f(v)                  | Nothing
//   join()           | v   (v est un Maybe)  | Nothing
//   plus(other)      | self                  | other
//   pure/unit(x)     | Just(x)               | Just(x)
//   zero             | Nothing               | Nothing
//
// COURT-CIRCUIT : dès qu'une étape d'une chaîne donne Nothing, toutes les
// étapes suivantes (bind, map, apply) renvoient Nothing SANS appeler leur
// fonction.
//
// EXEMPLE :
//   fn safe_div(num: i32, denom: i32) -> Maybe<i32> {
//       if denom != 0 { Just(num / denom) } else { Nothing }
//   }
//
//   Just(5).bind(|x| safe_div(10, x))   == Just(2)
//   Just(5).bind(|x| safe_div(x, 0))    == Nothing
//
// =============================================================================

use std::fmt;

use tracing::trace;

use super::applicative::Applicative;
use super::functor::Functor;
use super::kind::Kind;
use super::monad::Monad;
use super::monad_plus::MonadPlus;

/// Une valeur optionnelle : `Just(v)` ou `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// Une valeur présente
    Just(T),
    /// Aucune valeur
    Nothing,
}

pub use Maybe::{Just, Nothing};

/// Le marqueur de type pour `Maybe` : c'est lui qui porte les capacités.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaybeKind;

impl Kind for MaybeKind {
    type Of<T> = Maybe<T>;
}

impl Functor for MaybeKind {
    fn fmap<A, B, F>(fa: Maybe<A>, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match fa {
            Just(a) => Just(f(a)),
            Nothing => Nothing,
        }
    }
}

impl Applicative for MaybeKind {
    fn pure<A>(value: A) -> Maybe<A> {
        Just(value)
    }

    fn apply<A, B, F>(ff: Maybe<F>, fa: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (ff, fa) {
            (Just(f), Just(a)) => Just(f(a)),
            (ff, _) => {
                trace!(function_missing = ff.is_nothing(), "apply court-circuité");
                Nothing
            }
        }
    }
}

impl Monad for MaybeKind {
    fn bind<A, B, F>(ma: Maybe<A>, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match ma {
            Just(a) => f(a),
            Nothing => {
                trace!("bind court-circuité sur Nothing");
                Nothing
            }
        }
    }

    /// S'arrête au premier Nothing : le reste de la suite n'est jamais tiré.
    fn sequence<A, I>(items: I) -> Maybe<Vec<A>>
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        let mut values = Vec::new();
        for item in items {
            match item {
                Just(v) => values.push(v),
                Nothing => {
                    trace!(collected = values.len(), "sequence court-circuité sur Nothing");
                    return Nothing;
                }
            }
        }
        Just(values)
    }
}

impl MonadPlus for MaybeKind {
    fn zero<A>() -> Maybe<A> {
        Nothing
    }

    fn plus<A>(left: Maybe<A>, right: Maybe<A>) -> Maybe<A> {
        match left {
            Just(_) => left,
            Nothing => right,
        }
    }

    /// Le premier Just décide : la suite n'est plus tirée.
    fn msum<A, I>(items: I) -> Maybe<A>
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        items.into_iter().find(Maybe::is_just).unwrap_or_default()
    }
}

// =============================================================================
// SURFACE EN MÉTHODES
// =============================================================================
//
// Les capacités vivent sur MaybeKind ; les méthodes ci-dessous permettent
// d'écrire les chaînes naturellement : Just(3).map(f).bind(g)...

impl<T> Maybe<T> {
    /// Construit `Just(value)`
    pub fn just(value: T) -> Self {
        Just(value)
    }

    /// Construit `Nothing`
    pub fn nothing() -> Self {
        Nothing
    }

    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Emprunte la valeur contenue
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(v) => Just(v),
            Nothing => Nothing,
        }
    }

    /// La valeur contenue, ou `default` pour Nothing
    pub fn from_just_or(self, default: T) -> T {
        match self {
            Just(v) => v,
            Nothing => default,
        }
    }

    /// Élimine le Maybe : `f(v)` pour Just(v), `default` pour Nothing.
    pub fn maybe<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Just(v) => f(v),
            Nothing => default,
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        MaybeKind::fmap(self, f)
    }

    pub fn pure(value: T) -> Self {
        MaybeKind::pure(value)
    }

    pub fn unit(value: T) -> Self {
        MaybeKind::unit(value)
    }

    /// `self` contient une fonction, appliquée à la valeur de `fa`.
    pub fn apply<A, B>(self, fa: Maybe<A>) -> Maybe<B>
    where
        T: FnOnce(A) -> B,
    {
        MaybeKind::apply(self, fa)
    }

    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        MaybeKind::bind(self, f)
    }

    pub fn lift_m<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        MaybeKind::lift_m(self, f)
    }

    pub fn lift_m2<U, V, F>(self, other: Maybe<U>, f: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        MaybeKind::lift_m2(self, other, f)
    }

    /// Comme `apply`, mais exprimé avec `bind`/`unit`.
    pub fn ap<A, B>(self, ma: Maybe<A>) -> Maybe<B>
    where
        T: FnOnce(A) -> B,
    {
        MaybeKind::ap(self, ma)
    }

    pub fn seq<U>(self, other: Maybe<U>) -> Maybe<U> {
        MaybeKind::seq(self, other)
    }

    pub fn zero() -> Self {
        MaybeKind::zero()
    }

    /// Le premier Just gagne.
    pub fn plus(self, other: Self) -> Self {
        MaybeKind::plus(self, other)
    }

    /// `Just` de tous les résultats, ou `Nothing` dès qu'un élément manque.
    pub fn sequence<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        MaybeKind::sequence(items)
    }

    /// Le premier Just de la suite, ou `Nothing`.
    pub fn msum<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        MaybeKind::msum(items)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Retire un niveau : `Just(Just(5))` → `Just(5)`.
    pub fn join(self) -> Maybe<T> {
        MaybeKind::join(self)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Just(v),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Just(v) => Some(v),
            Nothing => None,
        }
    }
}

impl<T> FromIterator<Maybe<T>> for Maybe<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        Maybe::sequence(iter)
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Just(v) => write!(f, "Just({})", v),
            Nothing => write!(f, "Nothing"),
        }
    }
}
