//! Shared definition blocks for the manual.
//!
//! The acronym substitutions are appended to every page through the
//! epilog; the macro table feeds both the LaTeX preamble and the KaTeX
//! macro options.

use once_cell::sync::Lazy;
use sfsdoc_katex::MacroTable;

/// Abbreviation substitutions, usable as `|HRTF|` in any source page.
/// Styled by `css/abbr.css`.
pub const ACRONYMS: &str = r"
.. |HRTF| replace:: :abbr:`HRTF (Head-Related Transfer Function)`
.. |BRIR| replace:: :abbr:`BRIR (Binaural Room Impulse Response)`
.. |WFS| replace:: :abbr:`WFS (Wave Field Synthesis)`
.. |NFC-HOA| replace:: :abbr:`NFC-HOA (Near-Field Compensated Higher Order Ambisonics)`
.. |SDM| replace:: :abbr:`SDM (Spectral Division Method)`
.. |LSFS| replace:: :abbr:`LSFS (Local Sound Field Synthesis)`
";

/// Math shorthands used across the manual.
///
/// Keys keep their leading backslash so they pass verbatim into both
/// `\newcommand` definitions and the KaTeX macros option.
pub static LATEX_MACROS: Lazy<MacroTable> = Lazy::new(|| {
    let mut macros = MacroTable::new();

    // Operators and constants
    macros.insert(r"\d".to_string(), r"\mathrm{d}".to_string());
    macros.insert(r"\e".to_string(), r"\mathrm{e}".to_string());
    macros.insert(r"\ii".to_string(), r"\mathrm{i}".to_string());
    macros.insert(r"\w".to_string(), r"\omega".to_string());
    macros.insert(r"\wc".to_string(), r"\frac{\omega}{c}".to_string());
    macros.insert(r"\Hz".to_string(), r"\mathrm{Hz}".to_string());

    // Positions and directions
    macros.insert(r"\x".to_string(), r"\mathbf{x}".to_string());
    macros.insert(r"\xs".to_string(), r"\mathbf{x}_\mathrm{s}".to_string());
    macros.insert(r"\xref".to_string(), r"\mathbf{x}_\mathrm{ref}".to_string());
    macros.insert(r"\n".to_string(), r"\mathbf{n}".to_string());
    macros.insert(r"\k".to_string(), r"\mathbf{k}".to_string());

    macros
});
