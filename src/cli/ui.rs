use console::style;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    /// Print the finished paper between labelled rules.
    pub fn paper(&self, document: &str) {
        println!();
        println!(
            "{}",
            style("===== FINAL PHILOSOPHY PAPER DRAFT =====").bold()
        );
        println!();
        println!("{}", document);
        println!();
        println!("{}", style("=========================================").bold());
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
