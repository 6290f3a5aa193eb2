//! Indentation-aware source text builder.
//!
//! Keeps the emitted C++ shape (4-space indent, Allman braces, the
//! recurring guard/diagnostic pattern) in one place so the per-artifact
//! emitters stay about type logic, not string plumbing.

const INDENT: &str = "    ";

/// Line-oriented builder for generated source text.
#[derive(Debug, Default)]
pub struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Open a brace block and indent.
    pub fn open(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    /// Dedent and close the current brace block.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Start at one indent level without opening a brace. Snippet artifacts
    /// are spliced into a host function body and carry its indentation.
    pub fn open_snippet(&mut self) {
        self.depth += 1;
    }

    /// The `std::cerr` diagnostic line every generated failure path prints:
    /// the enclosing function's name, then the stream expression `diag`.
    pub fn diagnostic(&mut self, func: &str, diag: &str) {
        self.line(format!(
            "std::cerr << \"{func}\" << \": \" << \"error: \" << {diag} << std::endl;"
        ));
    }

    /// The guard pattern: `if(cond)` → diagnostic → `return false;`.
    pub fn guard(&mut self, cond: &str, func: &str, diag: &str) {
        self.line(format!("if({cond})"));
        self.open();
        self.diagnostic(func, diag);
        self.line("return false;");
        self.close();
    }

    pub fn finish(self) -> String {
        self.out
    }
}
