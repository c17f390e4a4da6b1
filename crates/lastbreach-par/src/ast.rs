//! Syntax tree shared by the expression language and by the three file
//! dialects (character/world/catalog) that embed it.

use lastbreach_util::Symbol;

/// An expression. `Percent`/`Duration` literals are folded into plain
/// `Number` at parse time — the scaling (or lack of it) is a lexical detail,
/// not something the evaluator needs to distinguish.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Str(Symbol),
    /// A dotted or bare variable reference, already joined into one name
    /// (`char.hunger`, `stock`, `tick`, ...).
    Var(Symbol),
    Call(Symbol, Vec<Expr>),
    Unary(UnOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
}

/// A statement, shared by `thresholds`, `plan`, and `on` bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(Symbol, Expr),
    If(Expr, Vec<Stmt>, Option<Vec<Stmt>>),
    Task(TaskStmt),
    Set(Symbol, Expr),
    YieldTick,
    StopBlock,
}

/// `task STRING (for <expr> | priority <expr> | <tolerated clause>)*`.
///
/// `using`/`requires`/`consumes`/`produces`/`when` clauses are parsed and
/// thrown away immediately — see the parser failure policy note on
/// tolerated clauses. They never reach this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStmt {
    pub name: Symbol,
    pub duration: Option<Expr>,
    pub priority: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRule {
    pub when: Expr,
    pub action: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanEntry {
    Block {
        station: Symbol,
        start_tick: i64,
        end_tick: i64,
        body: Vec<Stmt>,
    },
    Rule {
        label: Option<Symbol>,
        priority: Expr,
        body: Vec<Stmt>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnHandler {
    pub event: Symbol,
    pub when: Option<Expr>,
    pub priority: Expr,
    pub body: Vec<Stmt>,
}

/// Parsed `character "Name" { ... }` block, before lowering into the
/// runtime `Character` the evaluator/scheduler operate on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharacterDecl {
    pub name: Symbol,
    pub version: Option<i64>,
    pub skills: Vec<(Symbol, f64)>,
    pub traits: Vec<Symbol>,
    pub defaults: Vec<(Symbol, DefaultValue)>,
    pub thresholds: Vec<ThresholdRule>,
    pub plan: Vec<PlanEntry>,
    pub on_handlers: Vec<OnHandler>,
}

/// `defaults` entries may be a bare identifier (`defense_posture: quiet;`)
/// or a number; only `defense_posture` is interpreted downstream, but both
/// forms must parse.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Ident(Symbol),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShelterDecl {
    pub temp_c: Option<f64>,
    pub signature: Option<f64>,
    pub power: Option<f64>,
    pub water_safe: Option<f64>,
    pub water_raw: Option<f64>,
    pub structure: Option<f64>,
    pub contamination: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub name: Symbol,
    pub qty: f64,
    pub cond: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyEvent {
    pub name: Symbol,
    pub chance: f64,
    pub when: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OvernightEvent {
    pub chance: f64,
    pub when: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldDecl {
    pub name: Option<Symbol>,
    pub version: Option<i64>,
    pub shelter: ShelterDecl,
    pub inventory: Vec<InventoryEntry>,
    pub daily_events: Vec<DailyEvent>,
    pub overnight: Option<OvernightEvent>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDefDecl {
    pub name: Symbol,
    pub time_ticks: Option<i64>,
    pub station: Option<Symbol>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogDecl {
    pub tasks: Vec<TaskDefDecl>,
}
