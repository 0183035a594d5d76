// =============================================================================
// COMBINATORS — Identité, composition, flip, curryfication
// =============================================================================
//
// Les briques élémentaires sur lesquelles reposent les lois :
//   identity   → le morphisme identité  (id ∘ f = f = f ∘ id)
//   compose    → la composition          ((f ∘ g) ∘ h = f ∘ (g ∘ h))
//   flip       → inverse l'ordre des deux arguments
//   curry2/3   → f(a, b) devient f(a)(b), utile pour `ap` sur plusieurs arguments
//   partial    → application partielle du premier argument
//   Curried    → curryfication à arité dynamique (l'aide "variadique")
//
// EXEMPLE :
//   let plus = |x: i32, y: i32| x + y;
//   Maybe::just(curry2(plus)).ap(Just(1)).ap(Just(2))   == Just(3)
//   Maybe::just(curry2(plus)).ap(Nothing).ap(Just(2))   == Nothing
//
// =============================================================================

use std::rc::Rc;

use tracing::debug;

use crate::error::{Error, Result};

/// La fonction identité : renvoie son argument tel quel.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composition : `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Inverse l'ordre des arguments d'une fonction binaire.
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Application partielle du premier argument d'une fonction binaire.
pub fn partial<A, B, C, F>(f: F, first: A) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |second| f(first.clone(), second)
}

/// Curryfie une fonction binaire : `curry2(f)(a)(b) == f(a, b)`.
///
/// Chaque application de `a` produit une fonction à usage unique : c'est
/// exactement ce qu'attend `ap`, qui consomme la fonction emballée.
pub fn curry2<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn FnOnce(B) -> C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Box<dyn FnOnce(B) -> C> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| (*f)(a, b))
    }
}

/// Curryfie une fonction ternaire : `curry3(f)(a)(b)(c) == f(a, b, c)`.
pub fn curry3<A, B, C, D, F>(f: F) -> impl Fn(A) -> Box<dyn FnOnce(B) -> Box<dyn FnOnce(C) -> D>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    F: Fn(A, B, C) -> D + 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Box<dyn FnOnce(B) -> Box<dyn FnOnce(C) -> D>> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| -> Box<dyn FnOnce(C) -> D> {
            let f = Rc::clone(&f);
            Box::new(move |c: C| (*f)(a, b, c))
        })
    }
}

/// L'inverse de `curry2` : `uncurry2(f)(a, b) == f(a)(b)`.
pub fn uncurry2<A, B, C, F, G>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |a, b| f(a)(b)
}

// =============================================================================
// CURRYFICATION À ARITÉ DYNAMIQUE
// =============================================================================

/// Une fonction n-aire (arguments homogènes) en cours d'application.
///
/// Les arguments sont collectés dans l'ordre d'appel ; quand le n-ième
/// arrive, la fonction d'origine est invoquée UNE seule fois.
/// Une valeur `Curried` partiellement appliquée est clonable : on peut la
/// réutiliser comme une fonction partielle ordinaire.
pub struct Curried<T, R> {
    arity: usize,
    args: Vec<T>,
    function: Rc<dyn Fn(Vec<T>) -> R>,
}

/// Résultat d'une application : encore en attente, ou terminé.
pub enum Applied<T, R> {
    Partial(Curried<T, R>),
    Complete(R),
}

impl<T, R> Applied<T, R> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Applied::Complete(_))
    }

    /// La valeur finale, si tous les arguments ont été fournis
    pub fn complete(self) -> Option<R> {
        match self {
            Applied::Complete(r) => Some(r),
            Applied::Partial(_) => None,
        }
    }

    /// La fonction encore en attente, si elle n'est pas terminée
    pub fn partial(self) -> Option<Curried<T, R>> {
        match self {
            Applied::Partial(c) => Some(c),
            Applied::Complete(_) => None,
        }
    }
}

impl<T, R> Curried<T, R> {
    /// Curryfie `function`, qui sera appelée avec exactement `arity` arguments.
    pub fn new<F>(arity: usize, function: F) -> Result<Self>
    where
        F: Fn(Vec<T>) -> R + 'static,
    {
        if arity == 0 {
            return Err(Error::NullaryFunction);
        }
        Ok(Curried {
            arity,
            args: Vec::with_capacity(arity),
            function: Rc::new(function),
        })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Nombre d'arguments encore attendus
    pub fn remaining(&self) -> usize {
        self.arity - self.args.len()
    }

    /// Fournit un argument.
    pub fn apply(mut self, arg: T) -> Applied<T, R> {
        self.args.push(arg);
        if self.args.len() == self.arity {
            debug!(arity = self.arity, "curryfication complète, appel de la fonction");
            let Curried { args, function, .. } = self;
            Applied::Complete((*function)(args))
        } else {
            Applied::Partial(self)
        }
    }

    /// Fournit plusieurs arguments d'un coup (l'équivalent de `f.$(a, b, ...)`).
    ///
    /// Un préfixe laisse une fonction partielle ; dépasser l'arité est une
    /// erreur et la fonction n'est alors jamais appelée.
    pub fn apply_all<I>(self, args: I) -> Result<Applied<T, R>>
    where
        I: IntoIterator<Item = T>,
    {
        let args: Vec<T> = args.into_iter().collect();
        let supplied = self.args.len() + args.len();
        if supplied > self.arity {
            debug!(arity = self.arity, supplied, "curryfication refusée : trop d'arguments");
            return Err(Error::TooManyArguments {
                arity: self.arity,
                supplied,
            });
        }

        let mut current = self;
        for arg in args {
            match current.apply(arg) {
                Applied::Partial(next) => current = next,
                Applied::Complete(r) => return Ok(Applied::Complete(r)),
            }
        }
        Ok(Applied::Partial(current))
    }
}

impl<T: Clone, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Curried {
            arity: self.arity,
            args: self.args.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<T: std::fmt::Debug, R> std::fmt::Debug for Curried<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Curried")
            .field("arity", &self.arity)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
