// Track diagram: line grammar, label sanitizing, Mermaid assembly and the HTML page.
// Pure text transforms: no I/O and no model calls in this module.

pub mod assemble;
pub mod grammar;
pub mod page;
pub mod sanitize;
