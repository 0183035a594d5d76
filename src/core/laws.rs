// =============================================================================
// LAWS — Vérification exécutable des lois algébriques
// =============================================================================
//
// Le système de types garantit les SIGNATURES, pas les LOIS. Ce module
// évalue chaque loi sur des entrées données et compare les deux côtés :
//
//   Functor     : identité, composition
//   Applicative : identité, homomorphisme, échange
//   Monad       : identité à gauche, identité à droite, associativité
//   MonadPlus   : zéro à gauche (bind), zéro à droite (seq), associativité de plus
//
// Tout est générique sur le marqueur de capacité : n'importe quelle instance
// conforme peut être vérifiée, pas seulement Maybe.
//
// Les fonctions `verify_*` regroupent les lois d'une capacité et renvoient
// la liste complète des violations, comme une validation de schéma.
//
// =============================================================================

use std::fmt;

use tracing::debug;

use super::applicative::Applicative;
use super::combinators::{compose, identity};
use super::functor::Functor;
use super::monad::Monad;
use super::monad_plus::MonadPlus;

/// Les lois vérifiables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    FunctorIdentity,
    FunctorComposition,
    ApplicativeIdentity,
    ApplicativeHomomorphism,
    ApplicativeInterchange,
    MonadLeftIdentity,
    MonadRightIdentity,
    MonadAssociativity,
    MonadPlusLeftZero,
    MonadPlusRightZero,
    MonadPlusAssociativity,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::FunctorIdentity => "Functor : identité",
            Law::FunctorComposition => "Functor : composition",
            Law::ApplicativeIdentity => "Applicative : identité",
            Law::ApplicativeHomomorphism => "Applicative : homomorphisme",
            Law::ApplicativeInterchange => "Applicative : échange",
            Law::MonadLeftIdentity => "Monad : identité à gauche",
            Law::MonadRightIdentity => "Monad : identité à droite",
            Law::MonadAssociativity => "Monad : associativité",
            Law::MonadPlusLeftZero => "MonadPlus : zéro à gauche",
            Law::MonadPlusRightZero => "MonadPlus : zéro à droite",
            Law::MonadPlusAssociativity => "MonadPlus : associativité de plus",
        };
        write!(f, "{}", name)
    }
}

/// Une loi dont les deux côtés diffèrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawViolation {
    pub law: Law,
    /// Côté gauche, formaté avec `Debug`
    pub left: String,
    /// Côté droit, formaté avec `Debug`
    pub right: String,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loi violée ({}) : {} ≠ {}", self.law, self.left, self.right)
    }
}

fn check<T>(law: Law, left: T, right: T) -> Result<(), LawViolation>
where
    T: PartialEq + fmt::Debug,
{
    if left == right {
        return Ok(());
    }
    debug!(law = %law, left = ?left, right = ?right, "loi violée");
    Err(LawViolation {
        law,
        left: format!("{:?}", left),
        right: format!("{:?}", right),
    })
}

fn collect<I>(results: I) -> Result<(), Vec<LawViolation>>
where
    I: IntoIterator<Item = Result<(), LawViolation>>,
{
    let errors: Vec<LawViolation> = results.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// FUNCTOR
// =============================================================================

/// fmap(x, id) == x
pub fn functor_identity<K, A>(fa: K::Of<A>) -> Result<(), LawViolation>
where
    K: Functor,
    K::Of<A>: Clone + PartialEq + fmt::Debug,
{
    let mapped = K::fmap::<A, A, _>(fa.clone(), identity::<A>);
    check(Law::FunctorIdentity, mapped, fa)
}

/// fmap(x, f ∘ g) == fmap(fmap(x, g), f)
pub fn functor_composition<K, A, B, C, F, G>(fa: K::Of<A>, f: F, g: G) -> Result<(), LawViolation>
where
    K: Functor,
    F: Fn(B) -> C,
    G: Fn(A) -> B,
    K::Of<A>: Clone,
    K::Of<C>: PartialEq + fmt::Debug,
{
    let left = K::fmap::<A, C, _>(fa.clone(), compose(&f, &g));
    let right = K::fmap::<B, C, _>(K::fmap::<A, B, _>(fa, &g), &f);
    check(Law::FunctorComposition, left, right)
}

pub fn verify_functor<K, A, B, C, F, G>(fa: K::Of<A>, f: F, g: G) -> Result<(), Vec<LawViolation>>
where
    K: Functor,
    F: Fn(B) -> C,
    G: Fn(A) -> B,
    K::Of<A>: Clone + PartialEq + fmt::Debug,
    K::Of<C>: PartialEq + fmt::Debug,
{
    collect([
        functor_identity::<K, A>(fa.clone()),
        functor_composition::<K, A, B, C, F, G>(fa, f, g),
    ])
}

// =============================================================================
// APPLICATIVE
// =============================================================================

/// apply(pure(id), v) == v
pub fn applicative_identity<K, A>(fa: K::Of<A>) -> Result<(), LawViolation>
where
    K: Applicative,
    K::Of<A>: Clone + PartialEq + fmt::Debug,
{
    // lift_a(v, g) est exactement apply(pure(g), v)
    let left = K::lift_a::<A, A, _>(fa.clone(), identity::<A>);
    check(Law::ApplicativeIdentity, left, fa)
}

/// apply(pure(f), pure(x)) == pure(f(x))
pub fn applicative_homomorphism<K, A, B, F>(f: F, x: A) -> Result<(), LawViolation>
where
    K: Applicative,
    A: Clone,
    F: Fn(A) -> B + Clone,
    K::Of<B>: PartialEq + fmt::Debug,
{
    let left = K::apply::<A, B, F>(K::pure::<F>(f.clone()), K::pure::<A>(x.clone()));
    let right = K::pure::<B>(f(x));
    check(Law::ApplicativeHomomorphism, left, right)
}

/// apply(u, pure(y)) == apply(pure(|f| f(y)), u)
pub fn applicative_interchange<K, A, B, F>(u: K::Of<F>, y: A) -> Result<(), LawViolation>
where
    K: Applicative,
    A: Clone,
    F: FnOnce(A) -> B,
    K::Of<F>: Clone,
    K::Of<B>: PartialEq + fmt::Debug,
{
    let left = K::apply::<A, B, F>(u.clone(), K::pure::<A>(y.clone()));
    let right = K::lift_a::<F, B, _>(u, move |f: F| f(y));
    check(Law::ApplicativeInterchange, left, right)
}

pub fn verify_applicative<K, A, B, F>(
    fa: K::Of<A>,
    f: F,
    u: K::Of<F>,
    x: A,
) -> Result<(), Vec<LawViolation>>
where
    K: Applicative,
    A: Clone,
    F: Fn(A) -> B + Clone,
    K::Of<A>: Clone + PartialEq + fmt::Debug,
    K::Of<B>: PartialEq + fmt::Debug,
    K::Of<F>: Clone,
{
    collect([
        applicative_identity::<K, A>(fa),
        applicative_homomorphism::<K, A, B, F>(f, x.clone()),
        applicative_interchange::<K, A, B, F>(u, x),
    ])
}

// =============================================================================
// MONAD
// =============================================================================

/// bind(unit(x), f) == f(x)
pub fn monad_left_identity<K, A, B, F>(x: A, f: F) -> Result<(), LawViolation>
where
    K: Monad,
    A: Clone,
    F: Fn(A) -> K::Of<B>,
    K::Of<B>: PartialEq + fmt::Debug,
{
    let left = K::bind::<A, B, _>(K::unit::<A>(x.clone()), &f);
    let right = f(x);
    check(Law::MonadLeftIdentity, left, right)
}

/// bind(m, unit) == m
pub fn monad_right_identity<K, A>(m: K::Of<A>) -> Result<(), LawViolation>
where
    K: Monad,
    K::Of<A>: Clone + PartialEq + fmt::Debug,
{
    let left = K::bind::<A, A, _>(m.clone(), |x| K::unit::<A>(x));
    check(Law::MonadRightIdentity, left, m)
}

/// bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
pub fn monad_associativity<K, A, B, C, F, G>(m: K::Of<A>, f: F, g: G) -> Result<(), LawViolation>
where
    K: Monad,
    F: Fn(A) -> K::Of<B>,
    G: Fn(B) -> K::Of<C>,
    K::Of<A>: Clone,
    K::Of<C>: PartialEq + fmt::Debug,
{
    let left = K::bind::<B, C, _>(K::bind::<A, B, _>(m.clone(), &f), &g);
    let right = K::bind::<A, C, _>(m, |x| K::bind::<B, C, _>(f(x), &g));
    check(Law::MonadAssociativity, left, right)
}

pub fn verify_monad<K, A, B, C, F, G>(
    x: A,
    m: K::Of<A>,
    f: F,
    g: G,
) -> Result<(), Vec<LawViolation>>
where
    K: Monad,
    A: Clone,
    F: Fn(A) -> K::Of<B>,
    G: Fn(B) -> K::Of<C>,
    K::Of<A>: Clone + PartialEq + fmt::Debug,
    K::Of<B>: PartialEq + fmt::Debug,
    K::Of<C>: PartialEq + fmt::Debug,
{
    collect([
        monad_left_identity::<K, A, B, _>(x, &f),
        monad_right_identity::<K, A>(m.clone()),
        monad_associativity::<K, A, B, C, _, _>(m, &f, &g),
    ])
}

// =============================================================================
// MONADPLUS
// =============================================================================

/// bind(zero, f) == zero
pub fn monad_plus_left_zero<K, A, B, F>(f: F) -> Result<(), LawViolation>
where
    K: MonadPlus,
    F: Fn(A) -> K::Of<B>,
    K::Of<B>: PartialEq + fmt::Debug,
{
    let left = K::bind::<A, B, _>(K::zero::<A>(), &f);
    check(Law::MonadPlusLeftZero, left, K::zero::<B>())
}

/// seq(m, zero) == zero
pub fn monad_plus_right_zero<K, A, B>(m: K::Of<A>) -> Result<(), LawViolation>
where
    K: MonadPlus,
    K::Of<B>: PartialEq + fmt::Debug,
{
    let left = K::seq::<A, B>(m, K::zero::<B>());
    check(Law::MonadPlusRightZero, left, K::zero::<B>())
}

/// plus(plus(a, b), c) == plus(a, plus(b, c))
pub fn monad_plus_associativity<K, A>(
    a: K::Of<A>,
    b: K::Of<A>,
    c: K::Of<A>,
) -> Result<(), LawViolation>
where
    K: MonadPlus,
    K::Of<A>: Clone + PartialEq + fmt::Debug,
{
    let left = K::plus::<A>(K::plus::<A>(a.clone(), b.clone()), c.clone());
    let right = K::plus::<A>(a, K::plus::<A>(b, c));
    check(Law::MonadPlusAssociativity, left, right)
}

pub fn verify_monad_plus<K, A, B, F>(
    a: K::Of<A>,
    b: K::Of<A>,
    c: K::Of<A>,
    f: F,
) -> Result<(), Vec<LawViolation>>
where
    K: MonadPlus,
    F: Fn(A) -> K::Of<B>,
    K::Of<A>: Clone + PartialEq + fmt::Debug,
    K::Of<B>: PartialEq + fmt::Debug,
{
    collect([
        monad_plus_left_zero::<K, A, B, F>(f),
        monad_plus_right_zero::<K, A, B>(a.clone()),
        monad_plus_associativity::<K, A>(a, b, c),
    ])
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kind::Kind;
    use crate::core::maybe::{Just, Maybe, MaybeKind, Nothing};

    /// Un "functor" qui oublie la valeur : viole l'identité.
    struct LossyKind;

    impl Kind for LossyKind {
        type Of<T> = Maybe<T>;
    }

    impl Functor for LossyKind {
        fn fmap<A, B, F>(_fa: Maybe<A>, _f: F) -> Maybe<B>
        where
            F: FnOnce(A) -> B,
        {
            Nothing
        }
    }

    /// Une "monade" dont le bind n'appelle jamais la fonction.
    struct DeafKind;

    impl Kind for DeafKind {
        type Of<T> = Maybe<T>;
    }

    impl Functor for DeafKind {
        fn fmap<A, B, F>(fa: Maybe<A>, f: F) -> Maybe<B>
        where
            F: FnOnce(A) -> B,
        {
            MaybeKind::fmap(fa, f)
        }
    }

    impl Applicative for DeafKind {
        fn pure<A>(value: A) -> Maybe<A> {
            Just(value)
        }

        fn apply<A, B, F>(ff: Maybe<F>, fa: Maybe<A>) -> Maybe<B>
        where
            F: FnOnce(A) -> B,
        {
            MaybeKind::apply(ff, fa)
        }
    }

    impl Monad for DeafKind {
        fn bind<A, B, F>(_ma: Maybe<A>, _f: F) -> Maybe<B>
        where
            F: FnOnce(A) -> Maybe<B>,
        {
            Nothing
        }
    }

    #[test]
    fn test_maybe_satisfies_functor_laws() {
        let f = |x: i32| x * 2;
        let g = |x: i32| x + 1;
        assert!(verify_functor::<MaybeKind, _, _, _, _, _>(Just(3), f, g).is_ok());
        assert!(verify_functor::<MaybeKind, _, _, _, _, _>(Nothing, f, g).is_ok());
    }

    #[test]
    fn test_maybe_satisfies_applicative_laws() {
        let f: fn(i32) -> i32 = |x| x * 7;
        assert!(verify_applicative::<MaybeKind, _, _, _>(Just(2), f, Just(f), 5).is_ok());
        assert!(verify_applicative::<MaybeKind, _, _, _>(Nothing, f, Nothing, 5).is_ok());
    }

    #[test]
    fn test_maybe_satisfies_monad_laws() {
        let f = |x: i32| if x > 0 { Just(x - 1) } else { Nothing };
        let g = |x: i32| Just(x.to_string());
        assert!(verify_monad::<MaybeKind, _, _, _, _, _>(4, Just(4), f, g).is_ok());
        assert!(verify_monad::<MaybeKind, _, _, _, _, _>(0, Just(0), f, g).is_ok());
        assert!(verify_monad::<MaybeKind, _, _, _, _, _>(1, Nothing, f, g).is_ok());
    }

    #[test]
    fn test_maybe_satisfies_monad_plus_laws() {
        let f = |x: i32| Just(x + 1);
        assert!(verify_monad_plus::<MaybeKind, _, _, _>(Just(1), Nothing, Just(3), f).is_ok());
        assert!(verify_monad_plus::<MaybeKind, _, _, _>(Nothing, Nothing, Just(3), f).is_ok());
        assert!(verify_monad_plus::<MaybeKind, _, _, _>(Nothing, Nothing, Nothing, f).is_ok());
    }

    #[test]
    fn test_lossy_functor_is_caught() {
        let errors = verify_functor::<LossyKind, _, _, _, _, _>(Just(1), |x: i32| x, |x: i32| x)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].law, Law::FunctorIdentity);
        assert_eq!(errors[0].left, "Nothing");
        assert_eq!(errors[0].right, "Just(1)");

        // Sur Nothing, oublier la valeur ne se voit pas
        let on_nothing =
            verify_functor::<LossyKind, _, _, _, _, _>(Nothing, |x: i32| x, |x: i32| x);
        assert!(on_nothing.is_ok());
    }

    #[test]
    fn test_deaf_monad_is_caught() {
        let f = |x: i32| Just(x + 1);
        let g = |x: i32| Just(x * 2);
        let errors = verify_monad::<DeafKind, _, _, _, _, _>(1, Just(1), f, g).unwrap_err();
        let laws: Vec<Law> = errors.iter().map(|e| e.law).collect();
        assert_eq!(laws, vec![Law::MonadLeftIdentity, Law::MonadRightIdentity]);
    }

    #[test]
    fn test_violation_display() {
        let v = LawViolation {
            law: Law::MonadRightIdentity,
            left: "Nothing".into(),
            right: "Just(1)".into(),
        };
        assert_eq!(
            v.to_string(),
            "Loi violée (Monad : identité à droite) : Nothing ≠ Just(1)"
        );
    }
}
