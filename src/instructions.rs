use std::io::{self, Write};
use std::path::Path;

const RULE_WIDE: usize = 60;

/// Step-by-step directions for doing the conversion by hand in a word processor.
pub fn print_manual_instructions(out: &mut dyn Write, input: &Path) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDE);

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "MANUAL CONVERSION INSTRUCTIONS")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(
        out,
        "If pandoc is not available, you can manually convert the documentation:"
    )?;
    writeln!(out)?;
    writeln!(out, "1. Copy the content from '{}'", input.display())?;
    writeln!(out, "2. Open Microsoft Word (or another word processor)")?;
    writeln!(out, "3. Create a new document")?;
    writeln!(out, "4. Paste the content")?;
    writeln!(out, "5. Apply formatting:")?;
    writeln!(out, "   - Use Heading 1 for main sections")?;
    writeln!(out, "   - Use Heading 2 for subsections")?;
    writeln!(out, "   - Use Heading 3 for sub-subsections")?;
    writeln!(out, "   - Format code blocks with a monospace font")?;
    writeln!(out, "   - Add page breaks between major sections")?;
    writeln!(out, "6. For the architecture diagram:")?;
    writeln!(out, "   - Copy the ASCII diagram")?;
    writeln!(out, "   - Use a monospace font (like Courier New)")?;
    writeln!(out, "   - Or recreate it using the word processor's drawing tools")?;
    writeln!(out, "7. Save as .docx format")?;
    writeln!(out)?;
    writeln!(out, "{rule}")?;

    Ok(())
}

pub fn print_tips(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Additional Tips:")?;
    writeln!(out, "- The Markdown file contains all the content you need")?;
    writeln!(
        out,
        "- The ASCII diagram can be enhanced with Word's drawing tools"
    )?;
    writeln!(
        out,
        "- Consider adding screenshots of the game for visual appeal"
    )?;
    writeln!(out, "- Use Word's built-in table of contents feature")?;
    Ok(())
}
