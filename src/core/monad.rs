// =============================================================================
// MONAD — Séquencer des calculs dépendants
// =============================================================================
//
// Une Monade M ajoute :
//   unit : A → M<A>                        (même rôle que `pure`)
//   bind : M<A> × (A → M<B>) → M<B>        (le calcul suivant dépend du résultat)
//
// Pour une valeur "en échec" (Nothing pour Maybe), `bind` court-circuite :
// la fonction n'est PAS appelée et l'échec est renvoyé tel quel.
//
// OPÉRATIONS DÉRIVÉES (écrites une seule fois, uniquement avec unit/bind) :
//   lift_m   : m.bind(|x| unit(f(x)))
//   lift_m2  : ma.bind(|x| mb.bind(|y| unit(f(x, y))))
//   ap       : mf.bind(|f| ma.bind(|x| unit(f(x))))
//   seq      : ma.bind(|_| mb)               (séquence en ignorant le résultat)
//   join     : mma.bind(id)                  (retire un niveau de structure)
//   sequence : [M<A>] → M<[A]>               (s'arrête au premier échec)
//
// LOIS :
//   Identité à gauche  : bind(unit(x), f)          == f(x)
//   Identité à droite  : bind(m, unit)             == m
//   Associativité      : bind(bind(m, f), g)       == bind(m, |x| bind(f(x), g))
//
// =============================================================================

use super::applicative::Applicative;
use super::combinators::identity;

/// Capacité Monad.
pub trait Monad: Applicative {
    /// Place une valeur dans la monade. Par défaut, c'est `pure`.
    fn unit<A>(value: A) -> Self::Of<A> {
        Self::pure(value)
    }

    /// Enchaîne un calcul dépendant du résultat précédent.
    fn bind<A, B, F>(ma: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> Self::Of<B>;

    /// Élève une fonction ordinaire dans la monade.
    fn lift_m<A, B, F>(ma: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::bind::<A, B, _>(ma, move |x| Self::unit::<B>(f(x)))
    }

    /// Élève une fonction binaire ordinaire dans la monade.
    fn lift_m2<A, B, C, F>(ma: Self::Of<A>, mb: Self::Of<B>, f: F) -> Self::Of<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::bind::<A, C, _>(ma, move |x| {
            Self::bind::<B, C, _>(mb, move |y| Self::unit::<C>(f(x, y)))
        })
    }

    /// Applique la fonction contenue dans `mf` à la valeur de `ma`.
    ///
    /// Pour une fonction à plusieurs arguments, on emballe sa version
    /// curryfiée et on enchaîne les `ap`.
    fn ap<A, B, F>(mf: Self::Of<F>, ma: Self::Of<A>) -> Self::Of<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::bind::<F, B, _>(mf, move |f| {
            Self::bind::<A, B, _>(ma, move |x| Self::unit::<B>(f(x)))
        })
    }

    /// Enchaîne deux calculs en ignorant le résultat du premier.
    fn seq<A, B>(ma: Self::Of<A>, mb: Self::Of<B>) -> Self::Of<B> {
        Self::bind::<A, B, _>(ma, move |_| mb)
    }

    /// Retire un niveau de structure monadique.
    fn join<A>(mma: Self::Of<Self::Of<A>>) -> Self::Of<A> {
        Self::bind::<Self::Of<A>, A, _>(mma, identity::<Self::Of<A>>)
    }

    /// Transforme une suite de calculs en un calcul de la suite des résultats.
    fn sequence<A, I>(items: I) -> Self::Of<Vec<A>>
    where
        I: IntoIterator<Item = Self::Of<A>>,
    {
        items
            .into_iter()
            .fold(Self::unit::<Vec<A>>(Vec::new()), |acc, ma| {
                Self::bind::<Vec<A>, Vec<A>, _>(acc, move |mut values| {
                    Self::lift_m::<A, Vec<A>, _>(ma, move |x| {
                        values.push(x);
                        values
                    })
                })
            })
    }
}
