//! # Term & Statement — O Átomo Lógico
//!
//! Um [`Statement`] é a menor afirmação que o Jardim Lógico entende:
//! um predicado aplicado a uma lista de termos, como `(isa Fido Dog)`.
//! Cada argumento é um [`Term`] — uma **constante** (`Fido`) ou uma
//! **variável** (`?x`), que pode ser ligada durante a unificação.
//!
//! ## Analogia: A Semente no Jardim
//!
//! Se um [`Fact`](super::Fact) é uma planta, o `Statement` é o seu **DNA** —
//! a informação pura, sem histórico de cultivo. Dois fatos são "a mesma
//! planta" exatamente quando seus statements são estruturalmente iguais.
//!
//! ## Sintaxe de Superfície
//!
//! | Forma | Exemplo | Significado |
//! |-------|---------|-------------|
//! | Constante | `Fido` | Símbolo atômico |
//! | Variável | `?x` | Posição livre, ligável por unificação |
//! | Statement | `(isa Fido Dog)` | Predicado + argumentos |
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use jardim_logico::core::{Statement, Term};
//!
//! let stmt = Statement::new(
//!     "isa",
//!     vec![Term::constant("Fido"), Term::variable("x")],
//! );
//! assert_eq!(stmt.to_string(), "(isa Fido ?x)");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Um termo lógico — argumento de um [`Statement`].
///
/// Variáveis são escritas com `?` na sintaxe de superfície (`?x`),
/// mas o nome armazenado **não** inclui o `?`. A distinção entre
/// variável e constante é estrutural, não léxica.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Variável livre — pode ser ligada a qualquer termo durante a unificação.
    Variable(String),
    /// Símbolo atômico — só unifica com um símbolo igual ou com uma variável.
    Constant(String),
}

impl Term {
    /// Cria uma variável a partir do nome **sem** o prefixo `?`.
    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    /// Cria uma constante.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(name.into())
    }

    /// `true` se o termo é uma [`Term::Variable`].
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }
}

/// Formatação na sintaxe de superfície: `?x` para variáveis, `Fido` para constantes.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(name) => write!(f, "?{}", name),
            Term::Constant(name) => write!(f, "{}", name),
        }
    }
}

/// Afirmação lógica atômica — um predicado aplicado a termos.
///
/// É a chave de identidade estrutural do jardim: a
/// [`KnowledgeBase`](super::KnowledgeBase) indexa fatos pelo `Statement`
/// completo, então `Hash`/`Eq` são derivados campo a campo.
///
/// O predicado é sempre um símbolo simples — variáveis vivem apenas nas
/// posições de argumento (ver decisão registrada no parser).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// Nome do predicado (ex: `isa`, `hasTail`).
    pub predicate: String,

    /// Argumentos do predicado, na ordem escrita.
    pub args: Vec<Term>,
}

impl Statement {
    /// Cria um novo statement.
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            args,
        }
    }

    /// `true` se nenhum argumento é variável — o statement está "plantado no chão".
    pub fn is_ground(&self) -> bool {
        !self.args.iter().any(Term::is_variable)
    }
}

/// Formatação na sintaxe de superfície: `(isa Fido Dog)`.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.predicate)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifica a formatação de statements com variáveis e constantes.
    #[test]
    fn test_display() {
        let stmt = Statement::new(
            "isa",
            vec![Term::variable("x"), Term::constant("Dog")],
        );
        assert_eq!(stmt.to_string(), "(isa ?x Dog)");
    }

    /// Statements iguais campo a campo são iguais (e têm o mesmo hash via Eq).
    #[test]
    fn test_structural_equality() {
        let a = Statement::new("isa", vec![Term::constant("Fido"), Term::constant("Dog")]);
        let b = Statement::new("isa", vec![Term::constant("Fido"), Term::constant("Dog")]);
        let c = Statement::new("isa", vec![Term::constant("Rex"), Term::constant("Dog")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    /// Um statement sem variáveis é ground; com qualquer variável, não.
    #[test]
    fn test_is_ground() {
        let ground = Statement::new("isa", vec![Term::constant("Fido")]);
        let open = Statement::new("isa", vec![Term::variable("x")]);
        assert!(ground.is_ground());
        assert!(!open.is_ground());
    }

    /// O Statement serializa e volta idêntico — requisito para qualquer
    /// consumidor que queira exportar a KB.
    #[test]
    fn test_serde_round_trip() {
        let stmt = Statement::new("isa", vec![Term::variable("x"), Term::constant("Dog")]);
        let json = serde_json::to_string(&stmt).unwrap();
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(stmt, back);
    }
}
