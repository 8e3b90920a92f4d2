//! # Encadeamento Para Frente — Um Passo de Derivação
//!
//! O passo [`fc_infer`](InferenceEngine::fc_infer) recebe **um** fato e
//! **uma** regra da [`KnowledgeBase`] e tenta uma única derivação:
//!
//! | Condições na regra | Casou `lhs[0]`? | Resultado |
//! |--------------------|-----------------|-----------|
//! | 1 | sim | novo **fato**: `rhs` instanciado |
//! | ≥ 2 | sim | nova **regra**: `lhs[1..]` + `rhs` instanciados |
//! | qualquer | não | nenhum efeito |
//!
//! Só a **primeira** condição é testada contra o fato — regras com várias
//! condições são satisfeitas por etapas: cada casamento reduz a regra a uma
//! especialização com uma condição a menos, e a especialização é semeada de
//! volta na KB, onde o próprio `add` dispara as próximas rodadas. É assim
//! que uma cadeia de reduções de condição única chega ao fato final.
//!
//! Cada item derivado nasce com a justificação `(fato, regra)` nas raízes,
//! e o passo termina registrando o broto correspondente nos dois genitores —
//! as arestas para frente e para trás do grafo de sustentação nascem juntas.

use crate::core::fact::{Fact, FactId, Support};
use crate::core::rule::{Rule, RuleId};
use crate::core::KnowledgeBase;
use crate::unify::{instantiate, match_statements};

/// Motor de inferência — struct sem estado, totalmente funcional.
///
/// O motor não armazena nada: recebe os ids dos genitores e a KB mutável,
/// e publica o que derivar de volta na própria KB.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Um passo de encadeamento para frente sobre `(fact, rule)`.
    ///
    /// Pré-condição: ambos os ids são membros de `kb`. Ids desconhecidos
    /// tornam o passo um no-op silencioso — pode acontecer quando uma
    /// rodada de propagação sobrevive a uma mescla no meio do caminho.
    pub fn fc_infer(fact_id: FactId, rule_id: RuleId, kb: &mut KnowledgeBase) {
        // Copia o necessário dos genitores antes de mutar a KB.
        let (fact_statement, lhs, rhs) = match (kb.fact(fact_id), kb.rule(rule_id)) {
            (Some(fact), Some(rule)) => (
                fact.statement.clone(),
                rule.lhs.clone(),
                rule.rhs.clone(),
            ),
            _ => return,
        };

        let Some(first_condition) = lhs.first() else {
            return;
        };
        let Some(bindings) = match_statements(first_condition, &fact_statement) else {
            return;
        };

        tracing::debug!(
            fact = %fact_statement,
            condition = %first_condition,
            bindings = %bindings,
            "inferência: condição casada"
        );

        let support = Support {
            fact: fact_id,
            rule: rule_id,
        };

        if lhs.len() == 1 {
            // Regra totalmente satisfeita: brota um fato novo.
            let statement = instantiate(&rhs, &bindings);
            tracing::debug!(statement = %statement, "inferência: fato derivado");
            let new_id = kb.add_fact(Fact::inferred(statement, support));

            if let Some(fact) = kb.fact_mut(fact_id) {
                fact.supports_facts.push(new_id);
            }
            if let Some(rule) = kb.rule_mut(rule_id) {
                rule.supports_facts.push(new_id);
            }
        } else {
            // Satisfação parcial: brota uma regra especializada, com a
            // condição casada consumida e as restantes instanciadas.
            let new_lhs: Vec<_> = lhs[1..]
                .iter()
                .map(|condition| instantiate(condition, &bindings))
                .collect();
            let new_rhs = instantiate(&rhs, &bindings);
            let specialized = Rule::inferred(new_lhs, new_rhs, support);
            tracing::debug!(rule = %specialized, "inferência: regra especializada");
            let new_id = kb.add_rule(specialized);

            if let Some(fact) = kb.fact_mut(fact_id) {
                fact.supports_rules.push(new_id);
            }
            if let Some(rule) = kb.rule_mut(rule_id) {
                rule.supports_rules.push(new_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FactOrRule;
    use crate::parser::{parse_line, parse_statement};

    fn seed(kb: &mut KnowledgeBase, line: &str) -> FactOrRule {
        let item = parse_line(line).unwrap();
        kb.assert_item(item.clone());
        item
    }

    /// Regra de condição única + fato casando: deriva o fato instanciado,
    /// com raízes e brotos ligados nos dois genitores.
    #[test]
    fn test_single_condition_derives_fact() {
        let mut kb = KnowledgeBase::new();
        seed(&mut kb, "fact: (isa Fido Dog)");
        seed(&mut kb, "rule: ((isa ?x Dog)) -> (hasTail ?x)");

        let derived = kb
            .get_fact(&parse_statement("(hasTail Fido)").unwrap())
            .expect("fato derivado deve existir");
        assert!(!derived.asserted);
        assert_eq!(derived.supported_by.len(), 1);

        let support = derived.supported_by[0];
        let parent_fact = kb.fact(support.fact).unwrap();
        let parent_rule = kb.rule(support.rule).unwrap();
        assert!(parent_fact.supports_facts.contains(&derived.id));
        assert!(parent_rule.supports_facts.contains(&derived.id));
    }

    /// Regra de duas condições: o casamento da primeira produz uma regra
    /// especializada, não um fato.
    #[test]
    fn test_multi_condition_specializes_rule() {
        let mut kb = KnowledgeBase::new();
        seed(&mut kb, "fact: (isa Fido Dog)");
        seed(&mut kb, "rule: ((isa ?x Dog) (owns ?y ?x)) -> (caresFor ?y ?x)");

        let specialized = kb
            .get_rule(
                &[parse_statement("(owns ?y Fido)").unwrap()],
                &parse_statement("(caresFor ?y Fido)").unwrap(),
            )
            .expect("regra especializada deve existir");
        assert!(!specialized.asserted);
        assert_eq!(specialized.supported_by.len(), 1);

        let support = specialized.supported_by[0];
        assert!(kb.fact(support.fact).unwrap().supports_rules.contains(&specialized.id));
        assert!(kb.rule(support.rule).unwrap().supports_rules.contains(&specialized.id));
        // Nenhum fato novo ainda — falta a segunda condição.
        assert_eq!(kb.fact_count(), 1);
    }

    /// Fato que não casa a primeira condição não tem efeito, mesmo que
    /// casasse uma condição posterior.
    #[test]
    fn test_only_first_condition_is_tried() {
        let mut kb = KnowledgeBase::new();
        seed(&mut kb, "fact: (owns Nina Fido)");
        seed(&mut kb, "rule: ((isa ?x Dog) (owns ?y ?x)) -> (caresFor ?y ?x)");

        assert_eq!(kb.fact_count(), 1);
        assert_eq!(kb.rule_count(), 1);
    }

    /// A asserção dentro do passo propaga transitivamente: a especialização
    /// encontra o fato já plantado e completa a cadeia sozinha.
    #[test]
    fn test_transitive_propagation_completes_chain() {
        let mut kb = KnowledgeBase::new();
        seed(&mut kb, "fact: (owns Nina Fido)");
        seed(&mut kb, "fact: (isa Fido Dog)");
        seed(&mut kb, "rule: ((isa ?x Dog) (owns ?y ?x)) -> (caresFor ?y ?x)");

        assert!(kb
            .get_fact(&parse_statement("(caresFor Nina Fido)").unwrap())
            .is_some());
    }

    /// Encadeamento em profundidade: Dog → Mammal → Animal com uma única
    /// semeadura de fato.
    #[test]
    fn test_chained_derivations() {
        let mut kb = KnowledgeBase::new();
        seed(&mut kb, "rule: ((isa ?x Dog)) -> (isa ?x Mammal)");
        seed(&mut kb, "rule: ((isa ?x Mammal)) -> (isa ?x Animal)");
        seed(&mut kb, "fact: (isa Fido Dog)");

        assert!(kb.get_fact(&parse_statement("(isa Fido Mammal)").unwrap()).is_some());
        assert!(kb.get_fact(&parse_statement("(isa Fido Animal)").unwrap()).is_some());
    }
}
