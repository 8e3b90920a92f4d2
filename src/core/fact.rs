//! # Fact — Uma Planta no Jardim Lógico
//!
//! Um [`Fact`] é um [`Statement`] cultivado dentro da
//! [`KnowledgeBase`](super::KnowledgeBase), com todo o seu histórico de
//! sustentação: quem o afirmou, quais derivações o justificam e o que ele
//! ajudou a derivar.
//!
//! ## Analogia: Raízes e Brotos
//!
//! - `asserted` — a planta foi **semeada à mão** (premissa externa)
//! - `supported_by` — as **raízes**: pares (fato, regra) que a justificam
//! - `supports_facts` / `supports_rules` — os **brotos**: o que cresceu a partir dela
//!
//! Uma planta sem raízes e não semeada à mão não se sustenta — a poda em
//! cascata ([`retract`](super::KnowledgeBase::retract)) a remove.
//!
//! ## Campos Principais
//!
//! | Campo | Tipo | Descrição |
//! |-------|------|-----------|
//! | `id` | UUID | Identificador estável na arena da KB |
//! | `statement` | [Statement] | Conteúdo lógico — chave de identidade estrutural |
//! | `asserted` | bool | Premissa externa, independente de derivação |
//! | `supported_by` | Vec<[Support]> | Justificações (arestas para trás) |
//! | `supports_facts` | Vec<FactId> | Fatos derivados com ajuda deste (arestas para frente) |
//! | `supports_rules` | Vec<RuleId> | Regras derivadas com ajuda deste |
//!
//! `asserted` e `supported_by` **não são mutuamente exclusivos**: um fato
//! semeado à mão pode acumular derivações, e um fato derivado pode ser
//! "promovido" a premissa por uma asserção posterior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rule::RuleId;
use super::term::Statement;

/// Alias de tipo para o identificador de um [Fact].
///
/// Utiliza UUID v4 para garantir unicidade sem coordenação central.
pub type FactId = Uuid;

/// Um par de justificação: a derivação que explica a presença de um item.
///
/// Cada `Support` nomeia o fato-gatilho e a regra aplicada em **uma**
/// execução do encadeamento para frente. Um item pode acumular vários
/// pares — cada um é uma explicação independente da sua presença.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    /// O fato que casou com a primeira condição da regra.
    pub fact: FactId,
    /// A regra cuja condição foi satisfeita.
    pub rule: RuleId,
}

/// Um fato no jardim: statement + histórico de sustentação.
///
/// A igualdade entre fatos é **estrutural sobre o `statement`** — o `id`,
/// as arestas e o timestamp não participam. É assim que a KB decide se um
/// item recém-derivado "já existe" e deve ter suas justificações mescladas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fact {
    /// Identificador único (UUID v4) — gerado automaticamente na criação.
    pub id: FactId,

    /// Conteúdo lógico do fato (ex: `(isa Fido Dog)`).
    pub statement: Statement,

    /// `true` se o fato foi semeado diretamente por um chamador externo.
    pub asserted: bool,

    /// Derivações que justificam este fato. Vazio para premissas puras.
    pub supported_by: Vec<Support>,

    /// Fatos que este fato ajudou a derivar (inverso de `supported_by` deles).
    pub supports_facts: Vec<FactId>,

    /// Regras que este fato ajudou a derivar.
    pub supports_rules: Vec<RuleId>,

    /// Timestamp de quando o fato entrou na KB.
    pub created_at: DateTime<Utc>,
}

impl Fact {
    /// Cria um fato **semeado à mão**: `asserted = true`, sem justificações.
    pub fn new(statement: Statement) -> Self {
        Self {
            id: Uuid::new_v4(),
            statement,
            asserted: true,
            supported_by: Vec::new(),
            supports_facts: Vec::new(),
            supports_rules: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Cria um fato **derivado** pelo motor de inferência:
    /// `asserted = false`, com exatamente uma justificação inicial.
    pub fn inferred(statement: Statement, support: Support) -> Self {
        Self {
            id: Uuid::new_v4(),
            statement,
            asserted: false,
            supported_by: vec![support],
            supports_facts: Vec::new(),
            supports_rules: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Igualdade estrutural: dois fatos são o mesmo fato quando seus
/// statements são iguais, independente de id ou histórico.
impl PartialEq for Fact {
    fn eq(&self, other: &Self) -> bool {
        self.statement == other.statement
    }
}

impl Eq for Fact {}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fact: {}", self.statement)
    }
}
