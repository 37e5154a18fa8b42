//! Parse tree definitions produced by the recursive descent parser
//!
//! Every grammar rule the parser recognizes becomes one [`ParseTreeNode`];
//! tokens become [`NodeKind::Terminal`] leaves carrying their text.

use std::fmt;

/// What a [`ParseTreeNode`] stands for: a grammar rule, or a recognized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Statement,
    VariableDeclaration,
    MainStatement,
    ReturnStatement,
    IfStatement,
    WhileStatement,
    ForStatement,
    InputStatement,
    OutputStatement,
    ContinueStatement,
    BreakStatement,
    IncludeStatement,
    UsingNamespaceStatement,
    Block,
    Assignment,
    CallStatement,
    FunctionCall,
    Expression,
    Term,
    Factor,
    /// A token taken verbatim from the input (keyword, name, literal, symbol)
    Terminal(String),
}

impl NodeKind {
    /// Textual label: the rule name, or the token text for terminals.
    pub fn label(&self) -> &str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Statement => "statement",
            NodeKind::VariableDeclaration => "variableDeclaration",
            NodeKind::MainStatement => "mainStatement",
            NodeKind::ReturnStatement => "returnStatement",
            NodeKind::IfStatement => "ifStatement",
            NodeKind::WhileStatement => "whileStatement",
            NodeKind::ForStatement => "forStatement",
            NodeKind::InputStatement => "inputStatement",
            NodeKind::OutputStatement => "outputStatement",
            NodeKind::ContinueStatement => "continueStatement",
            NodeKind::BreakStatement => "breakStatement",
            NodeKind::IncludeStatement => "includeStatement",
            NodeKind::UsingNamespaceStatement => "usingNamespaceStatement",
            NodeKind::Block => "block",
            NodeKind::Assignment => "assignment",
            NodeKind::CallStatement => "callStatement",
            NodeKind::FunctionCall => "functionCall",
            NodeKind::Expression => "expression",
            NodeKind::Term => "term",
            NodeKind::Factor => "factor",
            NodeKind::Terminal(text) => text,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKind::Terminal(_))
    }
}

/// A node of the parse tree. Each node owns its children, in the order the
/// grammar recognized them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTreeNode {
    pub kind: NodeKind,
    pub children: Vec<ParseTreeNode>,
}

impl ParseTreeNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(NodeKind::Root)
    }

    pub fn terminal(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Terminal(text.into()))
    }

    pub fn label(&self) -> &str {
        self.kind.label()
    }

    pub fn push(&mut self, child: ParseTreeNode) {
        self.children.push(child);
    }

    pub fn push_terminal(&mut self, text: impl Into<String>) {
        self.children.push(Self::terminal(text));
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ParseTreeNode::node_count).sum::<usize>()
    }

    /// Render the subtree as an indented outline, one label per line.
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_outline(0, &mut lines);
        lines
    }

    fn collect_outline(&self, depth: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}{}", "  ".repeat(depth), self.label()));
        for child in &self.children {
            child.collect_outline(depth + 1, lines);
        }
    }
}

impl fmt::Display for ParseTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.outline() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
