//! # KnowledgeBase — O Solo do Jardim Lógico
//!
//! A [`KnowledgeBase`] é o contêiner central: armazena todos os fatos e
//! regras em memória, dispara o encadeamento para frente a cada semeadura
//! e executa a **poda em cascata** quando uma premissa é retratada.
//!
//! ## Armazenamento
//!
//! - **Fatos**: `HashMap<FactId, Fact>` — busca O(1) por id
//! - **Regras**: `HashMap<RuleId, Rule>` — busca O(1) por id
//! - **Ordem de plantio**: `Vec<FactId>` / `Vec<RuleId>` — a travessia de
//!   inferência e de `ask` segue a ordem de inserção, nunca a ordem do HashMap
//! - **Índices estruturais**: `HashMap<Statement, FactId>` e
//!   `HashMap<(lhs, rhs), RuleId>` — identidade estrutural sem varredura linear
//!
//! Os índices estruturais são derivados dos mapas principais e **não são
//! serializados** (`#[serde(skip)]`). Após desserialização, devem ser
//! reconstruídos via [`rebuild_index()`](KnowledgeBase::rebuild_index).
//!
//! ## Grafo de Sustentação
//!
//! Cada item mantém raízes (`supported_by`) e brotos (`supports_facts` /
//! `supports_rules`). A KB é a única guardiã da consistência dessas arestas:
//!
//! - um par `(f, r)` em `x.supported_by` implica `x` nos brotos de `f` e de `r`
//! - item não-asserted com `supported_by` vazio **nunca** permanece na KB
//! - nenhuma aresta aponta para item removido
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use jardim_logico::core::{Fact, FactOrRule, KnowledgeBase};
//! use jardim_logico::parser::parse_statement;
//!
//! let mut kb = KnowledgeBase::new();
//! kb.assert_item(Fact::new(parse_statement("(isa Fido Dog)").unwrap()).into());
//!
//! let query = Fact::new(parse_statement("(isa ?x Dog)").unwrap());
//! let answers = kb.ask(&FactOrRule::Fact(query));
//! assert_eq!(answers.len(), 1);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::bindings::AskResult;
use super::fact::{Fact, FactId, Support};
use super::rule::{Rule, RuleId};
use super::term::Statement;
use crate::inference::InferenceEngine;
use crate::unify::match_statements;

/// Um item semeável na KB: fato ou regra.
///
/// É a moeda das operações externas — `assert_item`, `retract` e `ask`
/// aceitam qualquer um dos dois lados (com `ask` reportando consulta
/// inválida para regras).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FactOrRule {
    /// Um fato.
    Fact(Fact),
    /// Uma regra.
    Rule(Rule),
}

impl From<Fact> for FactOrRule {
    fn from(fact: Fact) -> Self {
        FactOrRule::Fact(fact)
    }
}

impl From<Rule> for FactOrRule {
    fn from(rule: Rule) -> Self {
        FactOrRule::Rule(rule)
    }
}

impl fmt::Display for FactOrRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactOrRule::Fact(fact) => write!(f, "{}", fact),
            FactOrRule::Rule(rule) => write!(f, "{}", rule),
        }
    }
}

/// Referência tipada a um nó do grafo de sustentação.
///
/// Usada internamente pela poda em cascata para carregar na worklist
/// tanto fatos quanto regras sem apagar o tipo.
#[derive(Clone, Copy, Debug)]
enum NodeRef {
    Fact(FactId),
    Rule(RuleId),
}

impl NodeRef {
    /// `true` se o par de justificação nomeia este nó em qualquer lado.
    fn names(&self, support: &Support) -> bool {
        match self {
            NodeRef::Fact(id) => support.fact == *id,
            NodeRef::Rule(id) => support.rule == *id,
        }
    }
}

/// Base de conhecimento in-memory — contêiner central de [Fact]s e [Rule]s.
///
/// Todas as operações de leitura e escrita passam por esta struct. O fluxo
/// é single-threaded e reentrante por pilha de chamadas: `assert_item`
/// dispara inferência, que dispara novos `add`, até o fecho transitivo.
#[derive(Serialize, Deserialize, Default)]
pub struct KnowledgeBase {
    /// Arena de fatos: ID → Fato.
    facts: HashMap<FactId, Fact>,

    /// Arena de regras: ID → Regra.
    rules: HashMap<RuleId, Rule>,

    /// Ordem de plantio dos fatos — define a travessia de `ask` e da inferência.
    fact_order: Vec<FactId>,

    /// Ordem de plantio das regras.
    rule_order: Vec<RuleId>,

    /// Índice estrutural: statement → id do fato que o carrega.
    ///
    /// **Não serializado** — reconstruído em memória após load.
    #[serde(skip, default)]
    fact_index: HashMap<Statement, FactId>,

    /// Índice estrutural: (lhs, rhs) → id da regra.
    ///
    /// **Não serializado** — reconstruído em memória após load.
    #[serde(skip, default)]
    rule_index: HashMap<(Vec<Statement>, Statement), RuleId>,
}

impl KnowledgeBase {
    /// Cria uma KnowledgeBase vazia.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstrói os índices estruturais a partir das arenas.
    ///
    /// **Deve ser chamado após desserialização**, porque os índices são
    /// `#[serde(skip)]` e portanto estarão vazios.
    pub fn rebuild_index(&mut self) {
        self.fact_index.clear();
        self.rule_index.clear();
        for (id, fact) in &self.facts {
            self.fact_index.insert(fact.statement.clone(), *id);
        }
        for (id, rule) in &self.rules {
            self.rule_index.insert(rule.signature(), *id);
        }
    }

    /// Busca um fato por id.
    pub fn fact(&self, id: FactId) -> Option<&Fact> {
        self.facts.get(&id)
    }

    /// Busca uma regra por id.
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(&id)
    }

    /// Acesso mutável a um fato — usado pelo motor de inferência para
    /// registrar as arestas de broto após uma derivação.
    pub(crate) fn fact_mut(&mut self, id: FactId) -> Option<&mut Fact> {
        self.facts.get_mut(&id)
    }

    /// Acesso mutável a uma regra.
    pub(crate) fn rule_mut(&mut self, id: RuleId) -> Option<&mut Rule> {
        self.rules.get_mut(&id)
    }

    /// Busca o fato estruturalmente igual ao statement, se plantado.
    pub fn get_fact(&self, statement: &Statement) -> Option<&Fact> {
        self.fact_index.get(statement).and_then(|id| self.facts.get(id))
    }

    /// Busca a regra estruturalmente igual ao par `(lhs, rhs)`, se plantada.
    pub fn get_rule(&self, lhs: &[Statement], rhs: &Statement) -> Option<&Rule> {
        self.rule_index
            .get(&(lhs.to_vec(), rhs.clone()))
            .and_then(|id| self.rules.get(id))
    }

    /// Itera sobre os fatos na ordem de plantio.
    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.fact_order.iter().filter_map(|id| self.facts.get(id))
    }

    /// Itera sobre as regras na ordem de plantio.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rule_order.iter().filter_map(|id| self.rules.get(id))
    }

    /// Número de fatos na KB.
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// Número de regras na KB.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Semeia um fato ou regra na KB — a porta de entrada externa.
    ///
    /// Semanticamente idêntico a [`add_fact`](Self::add_fact) /
    /// [`add_rule`](Self::add_rule); a distinção é só de intenção
    /// (premissa externa vs publicação interna do motor de inferência).
    pub fn assert_item(&mut self, item: FactOrRule) {
        tracing::info!(item = %item, "KB: semeando");
        match item {
            FactOrRule::Fact(fact) => {
                self.add_fact(fact);
            }
            FactOrRule::Rule(rule) => {
                self.add_rule(rule);
            }
        }
    }

    /// Insere ou mescla um fato; retorna o id do fato canônico na KB.
    ///
    /// - Fato **novo**: entra na arena e é propagado contra cada regra que
    ///   existia no momento da chamada (o encadeamento pode plantar regras
    ///   novas durante o loop; elas não participam desta rodada).
    /// - Fato **já plantado** trazendo justificações: as justificações são
    ///   anexadas ao fato existente (acúmulo de derivações independentes).
    /// - Fato **já plantado** sem justificações: o existente é promovido a
    ///   premissa (`asserted = true`) — é a re-asserção de um derivado.
    pub fn add_fact(&mut self, fact: Fact) -> FactId {
        if let Some(&id) = self.fact_index.get(&fact.statement) {
            if let Some(existing) = self.facts.get_mut(&id) {
                if fact.supported_by.is_empty() {
                    tracing::debug!(statement = %existing.statement, "KB: fato promovido a premissa");
                    existing.asserted = true;
                } else {
                    tracing::debug!(
                        statement = %existing.statement,
                        novas = fact.supported_by.len(),
                        "KB: justificações mescladas em fato existente"
                    );
                    existing.supported_by.extend(fact.supported_by);
                }
            }
            return id;
        }

        let id = fact.id;
        tracing::debug!(statement = %fact.statement, asserted = fact.asserted, "KB: fato armazenado");
        self.fact_index.insert(fact.statement.clone(), id);
        self.fact_order.push(id);
        self.facts.insert(id, fact);

        // Propaga contra as regras existentes no momento da chamada.
        let rules_snapshot = self.rule_order.clone();
        for rule_id in rules_snapshot {
            InferenceEngine::fc_infer(id, rule_id, self);
        }
        id
    }

    /// Insere ou mescla uma regra; retorna o id da regra canônica na KB.
    ///
    /// Espelho exato de [`add_fact`](Self::add_fact), com a propagação
    /// percorrendo os fatos existentes no momento da chamada.
    pub fn add_rule(&mut self, rule: Rule) -> RuleId {
        let signature = rule.signature();
        if let Some(&id) = self.rule_index.get(&signature) {
            if let Some(existing) = self.rules.get_mut(&id) {
                if rule.supported_by.is_empty() {
                    tracing::debug!(rule = %existing, "KB: regra promovida a premissa");
                    existing.asserted = true;
                } else {
                    tracing::debug!(
                        rule = %existing,
                        novas = rule.supported_by.len(),
                        "KB: justificações mescladas em regra existente"
                    );
                    existing.supported_by.extend(rule.supported_by);
                }
            }
            return id;
        }

        let id = rule.id;
        tracing::debug!(rule = %rule, asserted = rule.asserted, "KB: regra armazenada");
        self.rule_index.insert(signature, id);
        self.rule_order.push(id);
        self.rules.insert(id, rule);

        let facts_snapshot = self.fact_order.clone();
        for fact_id in facts_snapshot {
            InferenceEngine::fc_infer(fact_id, id, self);
        }
        id
    }

    /// Consulta a KB: casa o statement da consulta contra cada fato plantado,
    /// na ordem de plantio.
    ///
    /// Retorna uma entrada por fato casado, com as ligações de variáveis que
    /// fizeram o casamento. Consulta sem resposta é lista vazia, não erro.
    ///
    /// Passar uma [`Rule`] como consulta é a condição **MalformedQuery**:
    /// reporta via `warn` e retorna vazio, sem pânico.
    pub fn ask(&self, query: &FactOrRule) -> Vec<AskResult> {
        let query_fact = match query {
            FactOrRule::Fact(fact) => fact,
            FactOrRule::Rule(rule) => {
                tracing::warn!(rule = %rule, "KB: consulta inválida — ask aceita apenas fatos");
                return Vec::new();
            }
        };
        tracing::info!(query = %query_fact.statement, "KB: consultando");

        let mut results = Vec::new();
        for id in &self.fact_order {
            if let Some(fact) = self.facts.get(id) {
                if let Some(bindings) = match_statements(&query_fact.statement, &fact.statement) {
                    results.push(AskResult {
                        bindings,
                        facts: vec![*id],
                    });
                }
            }
        }
        results
    }

    /// Retrata uma premissa — a poda externa do jardim.
    ///
    /// - Item ausente da KB: reporta (**NotPresent**) e não faz nada.
    /// - Item sem justificações derivadas: é removido, e a remoção se
    ///   propaga em cascata para tudo que deixar de se sustentar.
    /// - Item ainda justificado por derivações: sobrevive (a conclusão
    ///   continua valendo), mas deixa de ser premissa (`asserted = false`).
    ///   As arestas do grafo ficam intactas e simétricas — a poda só
    ///   acontece se as justificações restantes colapsarem depois.
    pub fn retract(&mut self, item: &FactOrRule) {
        tracing::info!(item = %item, "KB: retratando");
        let node = match item {
            FactOrRule::Fact(fact) => match self.fact_index.get(&fact.statement) {
                Some(&id) => NodeRef::Fact(id),
                None => {
                    tracing::warn!(statement = %fact.statement, "KB: fato não está na KB");
                    return;
                }
            },
            FactOrRule::Rule(rule) => match self.rule_index.get(&rule.signature()) {
                Some(&id) => NodeRef::Rule(id),
                None => {
                    tracing::warn!(rule = %rule, "KB: regra não está na KB");
                    return;
                }
            },
        };

        let still_justified = match node {
            NodeRef::Fact(id) => self
                .facts
                .get(&id)
                .is_some_and(|f| !f.supported_by.is_empty()),
            NodeRef::Rule(id) => self
                .rules
                .get(&id)
                .is_some_and(|r| !r.supported_by.is_empty()),
        };

        if still_justified {
            // Ainda há derivações que o explicam: só deixa de ser premissa.
            match node {
                NodeRef::Fact(id) => {
                    if let Some(fact) = self.facts.get_mut(&id) {
                        tracing::debug!(statement = %fact.statement, "KB: fato ainda justificado, deixa de ser premissa");
                        fact.asserted = false;
                    }
                }
                NodeRef::Rule(id) => {
                    if let Some(rule) = self.rules.get_mut(&id) {
                        tracing::debug!(rule = %rule, "KB: regra ainda justificada, deixa de ser premissa");
                        rule.asserted = false;
                    }
                }
            }
        } else {
            self.remove_cascade(node);
        }
    }

    /// Poda em cascata: remove um nó e tudo que deixar de se sustentar.
    ///
    /// Usa uma worklist explícita em vez de recursão nativa — cadeias de
    /// justificação longas não consomem pilha. Para cada nó removido:
    ///
    /// 1. sai da arena, da ordem de plantio e do índice estrutural;
    /// 2. some de **todas** as listas de brotos do jardim (nenhuma aresta
    ///    para frente aponta para item removido);
    /// 3. cada dependente perde os pares de justificação que o nomeavam
    ///    (em qualquer lado do par, duplicatas inclusive);
    /// 4. dependente órfão e não-asserted entra na worklist. Dependente
    ///    asserted sobrevive sempre — premissa só sai por `retract`.
    fn remove_cascade(&mut self, start: NodeRef) {
        let mut worklist = vec![start];
        while let Some(node) = worklist.pop() {
            let (supports_facts, supports_rules) = match node {
                NodeRef::Fact(id) => {
                    let Some(fact) = self.facts.remove(&id) else {
                        // Já removido por outro caminho da cascata.
                        continue;
                    };
                    self.fact_index.remove(&fact.statement);
                    self.fact_order.retain(|x| *x != id);
                    tracing::debug!(statement = %fact.statement, "KB: fato podado");
                    (fact.supports_facts, fact.supports_rules)
                }
                NodeRef::Rule(id) => {
                    let Some(rule) = self.rules.remove(&id) else {
                        continue;
                    };
                    self.rule_index.remove(&rule.signature());
                    self.rule_order.retain(|x| *x != id);
                    tracing::debug!(rule = %rule, "KB: regra podada");
                    (rule.supports_facts, rule.supports_rules)
                }
            };

            self.scrub_forward_edges(node);

            for fact_id in supports_facts {
                if let Some(dependent) = self.facts.get_mut(&fact_id) {
                    dependent.supported_by.retain(|s| !node.names(s));
                    if dependent.supported_by.is_empty() && !dependent.asserted {
                        worklist.push(NodeRef::Fact(fact_id));
                    }
                }
            }
            for rule_id in supports_rules {
                if let Some(dependent) = self.rules.get_mut(&rule_id) {
                    dependent.supported_by.retain(|s| !node.names(s));
                    if dependent.supported_by.is_empty() && !dependent.asserted {
                        worklist.push(NodeRef::Rule(rule_id));
                    }
                }
            }
        }
    }

    /// Remove um nó de todas as listas de brotos da KB.
    ///
    /// Varredura linear sobre as arenas — o custo é por nó removido, e a
    /// poda é a operação rara do jardim.
    fn scrub_forward_edges(&mut self, node: NodeRef) {
        match node {
            NodeRef::Fact(id) => {
                for fact in self.facts.values_mut() {
                    fact.supports_facts.retain(|x| *x != id);
                }
                for rule in self.rules.values_mut() {
                    rule.supports_facts.retain(|x| *x != id);
                }
            }
            NodeRef::Rule(id) => {
                for fact in self.facts.values_mut() {
                    fact.supports_rules.retain(|x| *x != id);
                }
                for rule in self.rules.values_mut() {
                    rule.supports_rules.retain(|x| *x != id);
                }
            }
        }
    }
}

/// Listagem completa da KB na ordem de plantio — o `print` do jardim.
impl fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Knowledge Base:")?;
        for fact in self.facts() {
            writeln!(f, "  {}", fact)?;
        }
        for rule in self.rules() {
            writeln!(f, "  {}", rule)?;
        }
        Ok(())
    }
}
