pub const COMMA: char = ',';
pub const SPACE: char = ' ';

pub const NULL_LITERAL: &str = "null";
pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 2;
