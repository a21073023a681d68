//! Line-oriented C code builder
//!
//! Each C construct used by the generator has exactly one function here, so
//! changing the output format only touches one place per construct.

/// Indentation for a single nesting level
const INDENT: &str = "   ";

/// Function call argument
#[derive(Copy, Clone, Debug)]
pub(crate) enum Arg<'a> {
    /// Emitted verbatim
    Expr(&'a str),
    /// Emitted as a string literal
    Str(&'a str),
}

/// Accumulates C source text, tracking the current nesting depth
pub(crate) struct CodeWriter {
    out: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_depth(0)
    }

    pub fn with_depth(depth: usize) -> Self {
        Self {
            out: String::new(),
            depth,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    /// Writes a line at the current depth
    pub fn line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.out += INDENT;
        }
        self.out += s;
        self.out.push('\n');
    }

    /// Writes an empty line, without indentation
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn comment(&mut self, s: &str) {
        self.line(&format!("/* {s} */"));
    }

    pub fn include_system(&mut self, header: &str) {
        self.line(&format!("#include <{header}>"));
    }

    pub fn include_local(&mut self, header: &str) {
        self.line(&format!("#include {}", string_literal(header)));
    }

    pub fn guard_open(&mut self, macro_name: &str) {
        self.line(&format!("#ifndef {macro_name}"));
        self.line(&format!("#define {macro_name}"));
    }

    pub fn guard_close(&mut self) {
        self.line("#endif");
    }

    /// Opens a struct body, e.g. `struct {`
    pub fn open_struct(&mut self, head: &str) {
        self.line(&format!("{head} {{"));
        self.depth += 1;
    }

    /// Closes a struct body, naming the field or typedef, e.g. `} solid;`
    pub fn close_struct(&mut self, name: &str) {
        self.depth -= 1;
        self.line(&format!("}} {name};"));
    }

    /// Declares a struct field or variable, e.g. `GLuint program;`
    pub fn decl(&mut self, ty: &str, name: &str) {
        self.line(&format!("{ty} {name};"));
    }

    pub fn extern_decl(&mut self, ty: &str, name: &str) {
        self.line(&format!("extern {ty} {name};"));
    }

    /// Declares a `void f (void)` function
    pub fn prototype(&mut self, name: &str) {
        self.line(&format!("void {name} (void);"));
    }

    /// Defines a `void f (void)` function, with `body` writing its statements
    pub fn function(&mut self, name: &str, body: impl FnOnce(&mut Self)) {
        self.line(&format!("void {name} (void) {{"));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("}");
    }

    /// Writes `lhs = func(args...);`
    pub fn assign_call(&mut self, lhs: &str, func: &str, args: &[Arg]) {
        self.line(&format!("{lhs} = {};", Self::call_expr(func, args)));
    }

    /// Writes `func(args...);`
    pub fn call(&mut self, func: &str, args: &[Arg]) {
        self.line(&format!("{};", Self::call_expr(func, args)));
    }

    /// Writes `if (cond) { ... }`, with `body` writing the guarded statements
    pub fn guarded(&mut self, cond: &str, body: impl FnOnce(&mut Self)) {
        self.line(&format!("if ({cond}) {{"));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("}");
    }

    /// Renders `func(args...)` as an expression
    pub fn call_expr(func: &str, args: &[Arg]) -> String {
        let args: Vec<String> = args
            .iter()
            .map(|a| match a {
                Arg::Expr(e) => (*e).to_owned(),
                Arg::Str(s) => string_literal(s),
            })
            .collect();
        format!("{func}({})", args.join(", "))
    }
}

/// Quotes a string as a C string literal
fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out += "\\\"",
            '\\' => out += "\\\\",
            '\n' => out += "\\n",
            '\t' => out += "\\t",
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
