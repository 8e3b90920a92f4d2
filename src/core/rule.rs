//! # Rule — Implicação com Condições Ordenadas
//!
//! Uma [`Rule`] é uma implicação `lhs → rhs`: uma lista ordenada de
//! condições ([`Statement`]s, possivelmente com variáveis) e uma conclusão
//! única. O motor de inferência só casa um fato contra a **primeira**
//! condição; regras com várias condições são satisfeitas por etapas, via
//! especialização (ver [`fc_infer`](crate::inference::InferenceEngine::fc_infer)).
//!
//! Uma regra carrega o mesmo aparato de sustentação de um
//! [`Fact`](super::Fact) — `asserted`, `supported_by`, `supports_*` — porque
//! regras **especializadas** são elas mesmas conhecimento derivado, podado
//! em cascata quando suas justificações colapsam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fact::{FactId, Support};
use super::term::Statement;

/// Alias de tipo para o identificador de uma [Rule].
pub type RuleId = Uuid;

/// Uma regra no jardim: condições, conclusão e histórico de sustentação.
///
/// A igualdade é estrutural sobre o par `(lhs, rhs)` — mesma política de
/// identidade dos fatos, aplicada a regras.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rule {
    /// Identificador único (UUID v4).
    pub id: RuleId,

    /// Condições, em ordem. Nunca vazia — uma regra sem condições não é
    /// uma implicação, e o parser rejeita a forma.
    pub lhs: Vec<Statement>,

    /// Conclusão única.
    pub rhs: Statement,

    /// `true` se a regra foi semeada diretamente por um chamador externo.
    pub asserted: bool,

    /// Derivações que justificam esta regra (vazio para premissas puras).
    pub supported_by: Vec<Support>,

    /// Fatos derivados com ajuda desta regra.
    pub supports_facts: Vec<FactId>,

    /// Regras (especializações) derivadas com ajuda desta regra.
    pub supports_rules: Vec<RuleId>,

    /// Timestamp de quando a regra entrou na KB.
    pub created_at: DateTime<Utc>,
}

impl Rule {
    /// Cria uma regra **semeada à mão**: `asserted = true`, sem justificações.
    pub fn new(lhs: Vec<Statement>, rhs: Statement) -> Self {
        Self {
            id: Uuid::new_v4(),
            lhs,
            rhs,
            asserted: true,
            supported_by: Vec::new(),
            supports_facts: Vec::new(),
            supports_rules: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Cria uma regra **especializada** pelo motor de inferência:
    /// `asserted = false`, com exatamente uma justificação inicial.
    pub fn inferred(lhs: Vec<Statement>, rhs: Statement, support: Support) -> Self {
        Self {
            id: Uuid::new_v4(),
            lhs,
            rhs,
            asserted: false,
            supported_by: vec![support],
            supports_facts: Vec::new(),
            supports_rules: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// A chave de identidade estrutural da regra, usada no índice da KB.
    pub fn signature(&self) -> (Vec<Statement>, Statement) {
        (self.lhs.clone(), self.rhs.clone())
    }
}

/// Igualdade estrutural sobre `(lhs, rhs)`.
impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.lhs == other.lhs && self.rhs == other.rhs
    }
}

impl Eq for Rule {}

/// Formato da sintaxe de superfície: `rule: ((isa ?x Dog)) -> (hasTail ?x)`.
impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rule: (")?;
        for (i, cond) in self.lhs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cond)?;
        }
        write!(f, ") -> {}", self.rhs)
    }
}
