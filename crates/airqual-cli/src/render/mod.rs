//! Report rendering: grouped, titled text blocks built from the
//! server-ordered feature list.

mod group;

pub mod alerts;
pub mod indexes;
pub mod stations;

pub(crate) use group::runs_by;

/// Title line followed by a dash rule of the title's character length.
fn titled(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}
