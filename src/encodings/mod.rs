//! Clause templates (C3) for each semantics' legality conditions.

mod templates;

pub use templates::{
    complete_in_1, complete_in_2, complete_out_1, complete_out_2, generate_theory, stable_in,
    stable_out, uniqueness, Template, COMPLETE_TEMPLATES, STABLE_TEMPLATES,
};
