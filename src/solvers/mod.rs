//! The solving layer: extension enumeration (C6) and the per-semantics
//! query dispatch (C7).

mod enumerate;
mod semantics_solver;

pub use enumerate::{build_payload, model_to_extension, single_extension, Enumerator};
pub use semantics_solver::{
    dc_co, dc_gr, dc_materialized, dc_pr, dc_st, ds_co, ds_materialized, ds_pr, ds_st, ee_co,
    ee_pr, ee_st, se_co, se_gr, se_pr, se_st,
};
