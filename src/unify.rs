//! # Unificação — Casamento e Instanciação de Statements
//!
//! As duas primitivas puras sobre as quais todo o resto se apoia:
//!
//! - [`match_statements`] — tenta unificar dois statements e produz as
//!   [`Bindings`] que os tornam iguais, ou `None` se não há casamento
//! - [`instantiate`] — aplica uma substituição a um statement, produzindo
//!   a versão total ou parcialmente ground
//!
//! Nenhuma das duas toca a KB e nenhuma falha com pânico: ausência de
//! casamento é `None`, variável não ligada fica no lugar.

use crate::core::bindings::Bindings;
use crate::core::term::{Statement, Term};

/// Tenta unificar `pattern` contra `candidate`.
///
/// Exige o mesmo predicado e a mesma aridade; em seguida unifica argumento
/// a argumento:
///
/// - constante × constante — precisam ser iguais
/// - variável × qualquer termo — liga (ou confere a ligação existente)
/// - a mesma variável casada duas vezes precisa casar com o **mesmo** termo
///
/// Dois statements ground idênticos unificam com ligações vazias — sucesso
/// legítimo, por isso o retorno é `Option` e nunca um sentinela vazio.
pub fn match_statements(pattern: &Statement, candidate: &Statement) -> Option<Bindings> {
    if pattern.predicate != candidate.predicate || pattern.args.len() != candidate.args.len() {
        return None;
    }

    let mut bindings = Bindings::new();
    for (a, b) in pattern.args.iter().zip(candidate.args.iter()) {
        let ok = match (a, b) {
            (Term::Constant(x), Term::Constant(y)) => x == y,
            (Term::Variable(name), other) => bindings.test_and_bind(name, other.clone()),
            (other, Term::Variable(name)) => bindings.test_and_bind(name, other.clone()),
        };
        if !ok {
            return None;
        }
    }
    Some(bindings)
}

/// Aplica uma substituição a um statement.
///
/// Variáveis ligadas são trocadas pelo termo ligado; variáveis livres
/// permanecem — é a instanciação parcial que especializa regras de
/// múltiplas condições.
pub fn instantiate(statement: &Statement, bindings: &Bindings) -> Statement {
    let args = statement
        .args
        .iter()
        .map(|term| match term {
            Term::Variable(name) => bindings.bound_to(name).cloned().unwrap_or_else(|| term.clone()),
            Term::Constant(_) => term.clone(),
        })
        .collect();
    Statement::new(statement.predicate.clone(), args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_statement;

    fn stmt(text: &str) -> Statement {
        parse_statement(text).unwrap()
    }

    /// Statements ground idênticos unificam com ligações vazias.
    #[test]
    fn test_ground_match_is_empty_bindings() {
        let b = match_statements(&stmt("(isa Fido Dog)"), &stmt("(isa Fido Dog)")).unwrap();
        assert!(b.is_empty());
    }

    /// Predicado ou aridade diferentes nunca casam.
    #[test]
    fn test_predicate_and_arity_must_agree() {
        assert!(match_statements(&stmt("(isa Fido Dog)"), &stmt("(has Fido Dog)")).is_none());
        assert!(match_statements(&stmt("(isa Fido Dog)"), &stmt("(isa Fido)")).is_none());
        assert!(match_statements(&stmt("(isa Fido Dog)"), &stmt("(isa Rex Dog)")).is_none());
    }

    /// Variável no padrão liga ao termo correspondente do candidato.
    #[test]
    fn test_variable_binds() {
        let b = match_statements(&stmt("(isa ?x Dog)"), &stmt("(isa Fido Dog)")).unwrap();
        assert_eq!(b.bound_to("x"), Some(&Term::constant("Fido")));
    }

    /// A mesma variável em duas posições exige o mesmo termo.
    #[test]
    fn test_repeated_variable_must_be_consistent() {
        assert!(match_statements(&stmt("(likes ?x ?x)"), &stmt("(likes Fido Fido)")).is_some());
        assert!(match_statements(&stmt("(likes ?x ?x)"), &stmt("(likes Fido Rex)")).is_none());
    }

    /// Variável do lado do candidato também liga — o lado da regra pode
    /// carregar variáveis livres.
    #[test]
    fn test_candidate_side_variable_binds() {
        let b = match_statements(&stmt("(isa Fido Dog)"), &stmt("(isa ?x Dog)")).unwrap();
        assert_eq!(b.bound_to("x"), Some(&Term::constant("Fido")));
    }

    /// Instanciação substitui ligadas e preserva livres.
    #[test]
    fn test_instantiate_partial() {
        let b = match_statements(&stmt("(isa ?x Dog)"), &stmt("(isa Fido Dog)")).unwrap();
        let out = instantiate(&stmt("(caresFor ?y ?x)"), &b);
        assert_eq!(out, stmt("(caresFor ?y Fido)"));
    }
}
