// Output rendering: Typst markup and the files written per subject.

pub mod output;
pub mod typst;
