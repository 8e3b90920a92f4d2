//! # Parser — Sintaxe Textual de Fatos e Regras
//!
//! Lê a sintaxe de superfície dos arquivos de conhecimento e produz
//! [`FactOrRule`]s prontos para semear na KB:
//!
//! ```text
//! # comentário — linha ignorada
//! fact: (isa Fido Dog)
//! rule: ((isa ?x Dog) (owns ?y ?x)) -> (caresFor ?y ?x)
//! ```
//!
//! Tokens que começam com `?` são variáveis; os demais são constantes.
//! Predicados são sempre símbolos simples — `?x` em posição de predicado
//! é rejeitado com [`ParseError::VariablePredicate`].
//!
//! Todo problema de sintaxe vira um [`ParseError`] tipado; o parser nunca
//! entra em pânico com entrada malformada.

use thiserror::Error;

use crate::core::fact::Fact;
use crate::core::knowledge_base::FactOrRule;
use crate::core::rule::Rule;
use crate::core::term::{Statement, Term};

/// Erros de sintaxe da linguagem de fatos e regras.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A linha não começa com `fact:` nem `rule:`.
    #[error("diretiva desconhecida em: {0}")]
    UnknownDirective(String),

    /// Parêntese de abertura ou fechamento faltando.
    #[error("parênteses desbalanceados em: {0}")]
    UnbalancedParens(String),

    /// `()` — statement sem predicado.
    #[error("statement vazio em: {0}")]
    EmptyStatement(String),

    /// Regra sem nenhuma condição no lado esquerdo.
    #[error("regra sem condições em: {0}")]
    EmptyConditions(String),

    /// Regra sem o separador `->` entre condições e conclusão.
    #[error("separador `->` faltando em: {0}")]
    MissingArrow(String),

    /// Variável em posição de predicado.
    #[error("variável `?{0}` não pode ser predicado")]
    VariablePredicate(String),

    /// Sobrou conteúdo depois do fim esperado da linha.
    #[error("tokens inesperados após o fim: {0}")]
    TrailingTokens(String),
}

/// Cursor simples sobre a lista de tokens de uma linha.
struct Tokens {
    items: Vec<String>,
    pos: usize,
}

impl Tokens {
    fn of(text: &str) -> Self {
        let mut items = Vec::new();
        let mut current = String::new();
        for c in text.chars() {
            match c {
                '(' | ')' => {
                    if !current.is_empty() {
                        items.push(std::mem::take(&mut current));
                    }
                    items.push(c.to_string());
                }
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        items.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(c),
            }
        }
        if !current.is_empty() {
            items.push(current);
        }
        Tokens { items, pos: 0 }
    }

    fn peek(&self) -> Option<&str> {
        self.items.get(self.pos).map(String::as_str)
    }

    fn next(&mut self) -> Option<String> {
        let token = self.items.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn finished(&self) -> bool {
        self.pos >= self.items.len()
    }
}

/// Converte um símbolo em termo: `?nome` vira variável, o resto constante.
fn symbol_to_term(symbol: &str) -> Term {
    match symbol.strip_prefix('?') {
        Some(name) if !name.is_empty() => Term::variable(name),
        _ => Term::constant(symbol),
    }
}

/// Consome um statement `(pred arg ...)` do cursor.
fn parse_statement_tokens(tokens: &mut Tokens, context: &str) -> Result<Statement, ParseError> {
    match tokens.next().as_deref() {
        Some("(") => {}
        _ => return Err(ParseError::UnbalancedParens(context.to_string())),
    }

    let predicate = match tokens.next() {
        Some(token) if token == ")" => {
            return Err(ParseError::EmptyStatement(context.to_string()))
        }
        Some(token) if token == "(" => {
            return Err(ParseError::UnbalancedParens(context.to_string()))
        }
        Some(token) => {
            if let Some(name) = token.strip_prefix('?') {
                return Err(ParseError::VariablePredicate(name.to_string()));
            }
            token
        }
        None => return Err(ParseError::UnbalancedParens(context.to_string())),
    };

    let mut args = Vec::new();
    loop {
        match tokens.next().as_deref() {
            Some(")") => return Ok(Statement::new(predicate, args)),
            Some("(") => return Err(ParseError::UnbalancedParens(context.to_string())),
            Some(symbol) => args.push(symbol_to_term(symbol)),
            None => return Err(ParseError::UnbalancedParens(context.to_string())),
        }
    }
}

/// Faz o parse de um statement isolado, como `(isa Fido Dog)`.
pub fn parse_statement(text: &str) -> Result<Statement, ParseError> {
    let mut tokens = Tokens::of(text);
    let statement = parse_statement_tokens(&mut tokens, text)?;
    if !tokens.finished() {
        return Err(ParseError::TrailingTokens(text.trim().to_string()));
    }
    Ok(statement)
}

/// Faz o parse de uma linha `fact: ...` ou `rule: ...`.
pub fn parse_line(line: &str) -> Result<FactOrRule, ParseError> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix("fact:") {
        return Ok(FactOrRule::Fact(Fact::new(parse_statement(rest)?)));
    }
    if let Some(rest) = line.strip_prefix("rule:") {
        return parse_rule(rest, line);
    }
    Err(ParseError::UnknownDirective(line.to_string()))
}

/// Corpo de uma regra: `((cond) (cond) ...) -> (conclusão)`.
fn parse_rule(body: &str, context: &str) -> Result<FactOrRule, ParseError> {
    let mut tokens = Tokens::of(body);

    match tokens.next().as_deref() {
        Some("(") => {}
        _ => return Err(ParseError::UnbalancedParens(context.to_string())),
    }

    let mut lhs = Vec::new();
    loop {
        match tokens.peek() {
            Some("(") => lhs.push(parse_statement_tokens(&mut tokens, context)?),
            Some(")") => {
                tokens.next();
                break;
            }
            _ => return Err(ParseError::UnbalancedParens(context.to_string())),
        }
    }
    if lhs.is_empty() {
        return Err(ParseError::EmptyConditions(context.to_string()));
    }

    match tokens.next().as_deref() {
        Some("->") => {}
        _ => return Err(ParseError::MissingArrow(context.to_string())),
    }

    let rhs = parse_statement_tokens(&mut tokens, context)?;
    if !tokens.finished() {
        return Err(ParseError::TrailingTokens(context.to_string()));
    }
    Ok(FactOrRule::Rule(Rule::new(lhs, rhs)))
}

/// Faz o parse de um arquivo de conhecimento inteiro.
///
/// Linhas em branco e comentários (`#`) são ignorados; a primeira linha
/// malformada aborta com o erro correspondente.
pub fn parse_lines(text: &str) -> Result<Vec<FactOrRule>, ParseError> {
    let mut items = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        items.push(parse_line(trimmed)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fato simples: predicado + constantes.
    #[test]
    fn test_parse_fact() {
        let item = parse_line("fact: (isa Fido Dog)").unwrap();
        let FactOrRule::Fact(fact) = item else {
            panic!("esperava fato");
        };
        assert_eq!(fact.statement.to_string(), "(isa Fido Dog)");
        assert!(fact.asserted);
    }

    /// Regra com duas condições e variáveis dos dois lados.
    #[test]
    fn test_parse_rule_multi_condition() {
        let item = parse_line("rule: ((isa ?x Dog) (owns ?y ?x)) -> (caresFor ?y ?x)").unwrap();
        let FactOrRule::Rule(rule) = item else {
            panic!("esperava regra");
        };
        assert_eq!(rule.lhs.len(), 2);
        assert_eq!(rule.lhs[0].to_string(), "(isa ?x Dog)");
        assert_eq!(rule.rhs.to_string(), "(caresFor ?y ?x)");
        assert_eq!(rule.rhs.args[0], Term::variable("y"));
    }

    /// Arquivo com comentários e linhas em branco.
    #[test]
    fn test_parse_lines_skips_comments() {
        let text = "\n# meu jardim\nfact: (isa Fido Dog)\n\nrule: ((isa ?x Dog)) -> (hasTail ?x)\n";
        let items = parse_lines(text).unwrap();
        assert_eq!(items.len(), 2);
    }

    /// Cada forma malformada produz o erro tipado correspondente.
    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_line("hello world"),
            Err(ParseError::UnknownDirective(_))
        ));
        assert!(matches!(
            parse_line("fact: (isa Fido Dog"),
            Err(ParseError::UnbalancedParens(_))
        ));
        assert!(matches!(
            parse_line("fact: ()"),
            Err(ParseError::EmptyStatement(_))
        ));
        assert!(matches!(
            parse_line("rule: (()) -> (a b)"),
            Err(ParseError::EmptyStatement(_))
        ));
        assert!(matches!(
            parse_line("rule: () -> (a b)"),
            Err(ParseError::EmptyConditions(_))
        ));
        assert!(matches!(
            parse_line("rule: ((isa ?x Dog)) (hasTail ?x)"),
            Err(ParseError::MissingArrow(_))
        ));
        assert!(matches!(
            parse_line("fact: (?x Fido)"),
            Err(ParseError::VariablePredicate(_))
        ));
        assert!(matches!(
            parse_statement("(isa Fido Dog) extra"),
            Err(ParseError::TrailingTokens(_))
        ));
    }

    /// `?` sozinho não é variável — vira constante literal.
    #[test]
    fn test_lone_question_mark_is_constant() {
        let stmt = parse_statement("(isa ? Dog)").unwrap();
        assert_eq!(stmt.args[0], Term::constant("?"));
    }
}
