//! # Bindings — Substituições de Variáveis
//!
//! Uma [`Bindings`] é o resultado de unificar dois statements: um mapa
//! ordenado de nome de variável para [`Term`]. É produzida por
//! [`match_statements`](crate::unify::match_statements) e consumida por
//! [`instantiate`](crate::unify::instantiate).
//!
//! Um conjunto **vazio** de bindings é um sucesso legítimo (dois statements
//! ground idênticos unificam sem ligar nada) — por isso a unificação retorna
//! `Option<Bindings>` e nunca usa o vazio como sentinela de falha.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fact::FactId;
use super::term::Term;

/// Uma ligação individual: variável → termo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Nome da variável, sem o prefixo `?`.
    pub variable: String,
    /// Termo ao qual a variável está ligada.
    pub term: Term,
}

/// Conjunto ordenado de ligações produzido por uma unificação.
///
/// A ordem de inserção é preservada — a primeira variável ligada aparece
/// primeiro na formatação, o que torna os logs determinísticos.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    bindings: Vec<Binding>,
}

impl Bindings {
    /// Cria um conjunto vazio de ligações.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retorna o termo ligado à variável `name`, se houver.
    pub fn bound_to(&self, name: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|b| b.variable == name)
            .map(|b| &b.term)
    }

    /// Tenta ligar `name` a `term`, respeitando ligações existentes.
    ///
    /// - Variável ainda livre → liga e retorna `true`
    /// - Variável já ligada ao **mesmo** termo → retorna `true` (consistente)
    /// - Variável já ligada a termo **diferente** → retorna `false` (conflito)
    pub fn test_and_bind(&mut self, name: &str, term: Term) -> bool {
        match self.bound_to(name) {
            Some(bound) => *bound == term,
            None => {
                self.bindings.push(Binding {
                    variable: name.to_string(),
                    term,
                });
                true
            }
        }
    }

    /// `true` se nenhuma variável foi ligada.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Número de variáveis ligadas.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Itera sobre as ligações na ordem em que foram criadas.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }
}

/// Formato legível `{?x → Fido, ?y → Dog}` — usado nos logs e na saída do CLI.
impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, b) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "?{} → {}", b.variable, b.term)?;
        }
        write!(f, "}}")
    }
}

/// Uma resposta de [`ask`](super::KnowledgeBase::ask): as ligações que fizeram
/// a consulta casar e os fatos da KB que as produziram.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskResult {
    /// Substituição que torna a consulta igual ao fato casado.
    pub bindings: Bindings,
    /// Fatos da KB que sustentam esta resposta.
    pub facts: Vec<FactId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ligar uma variável livre funciona; religar ao mesmo termo é consistente.
    #[test]
    fn test_bind_and_rebind_consistent() {
        let mut b = Bindings::new();
        assert!(b.test_and_bind("x", Term::constant("Fido")));
        assert!(b.test_and_bind("x", Term::constant("Fido")));
        assert_eq!(b.bound_to("x"), Some(&Term::constant("Fido")));
        assert_eq!(b.len(), 1);
    }

    /// Religar a um termo diferente é conflito — a ligação original permanece.
    #[test]
    fn test_rebind_conflict() {
        let mut b = Bindings::new();
        assert!(b.test_and_bind("x", Term::constant("Fido")));
        assert!(!b.test_and_bind("x", Term::constant("Rex")));
        assert_eq!(b.bound_to("x"), Some(&Term::constant("Fido")));
    }

    /// Conjunto vazio formata como `{}` e reporta is_empty.
    #[test]
    fn test_empty_display() {
        let b = Bindings::new();
        assert!(b.is_empty());
        assert_eq!(b.to_string(), "{}");
    }
}
