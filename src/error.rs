// =============================================================================
// ERROR — L'unique erreur d'usage de la bibliothèque
// =============================================================================
//
// L'algèbre elle-même ne "plante" jamais : l'échec EST une valeur (Nothing).
// La seule chose qu'on peut mal utiliser, c'est la curryfication à arité
// dynamique : donner plus d'arguments que la fonction n'en déclare, ou
// déclarer une fonction sans argument.
//
// =============================================================================

/// Erreur de curryfication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Plus d'arguments fournis que l'arité déclarée
    #[error("trop d'arguments : la fonction en attend {arity}, {supplied} fournis")]
    TooManyArguments { arity: usize, supplied: usize },

    /// Une fonction d'arité 0 n'a rien à curryfier
    #[error("une fonction d'arité 0 ne peut pas être curryfiée")]
    NullaryFunction,
}

pub type Result<T> = std::result::Result<T, Error>;
