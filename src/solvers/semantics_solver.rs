//! Semantics layer (C7): SE/EE/DC/DS for each of CO, GR, PR, ST.

use std::collections::BTreeSet;

use anyhow::Result;
use log::debug;

use super::enumerate::{single_extension, Enumerator};
use crate::aa::Framework;
use crate::encodings::{COMPLETE_TEMPLATES, STABLE_TEMPLATES};
use crate::extension::{maximal, Extension};
use crate::sat::{SatDriver, VarsPerArgument};

/// `SE-CO`: one complete extension (always exists — `∅` characteristic's
/// fixed point is complete, so this never returns `None` in practice, but
/// the signature matches the general enumeration-based contract).
pub fn se_co(framework: &Framework, driver: &dyn SatDriver) -> Result<Option<Extension>> {
    single_extension(framework, COMPLETE_TEMPLATES, VarsPerArgument::Complete, driver)
}

/// `EE-CO`: all complete extensions, lazily.
pub fn ee_co<'a>(framework: &'a Framework, driver: &'a dyn SatDriver) -> Enumerator<'a> {
    Enumerator::new(framework, COMPLETE_TEMPLATES, VarsPerArgument::Complete, driver)
}

/// `SE-ST`: one stable extension, or `None` if the AF has none.
pub fn se_st(framework: &Framework, driver: &dyn SatDriver) -> Result<Option<Extension>> {
    single_extension(framework, STABLE_TEMPLATES, VarsPerArgument::Stable, driver)
}

/// `EE-ST`: all stable extensions, lazily.
pub fn ee_st<'a>(framework: &'a Framework, driver: &'a dyn SatDriver) -> Enumerator<'a> {
    Enumerator::new(framework, STABLE_TEMPLATES, VarsPerArgument::Stable, driver)
}

/// `SE-GR`: the least fixed point of the characteristic operator, starting
/// from `∅`. No SAT call is needed.
pub fn se_gr(framework: &Framework) -> Extension {
    let mut grounded = BTreeSet::new();
    let mut current = BTreeSet::new();
    let mut iteration = 0;
    loop {
        let next = framework.characteristic(&current);
        grounded.extend(next.iter().copied());
        iteration += 1;
        if next == current {
            debug!("grounded fixed point reached after {iteration} iteration(s): {} arguments in", grounded.len());
            return grounded;
        }
        debug!("grounded fixed-point iteration {iteration}: {} arguments in so far", next.len());
        current = next;
    }
}

/// `DC-GR`: membership in the grounded extension.
pub fn dc_gr(framework: &Framework, arg: usize) -> bool {
    se_gr(framework).contains(&arg)
}

/// `EE-PR`: the ⊆-maximal complete extensions.
///
/// Necessarily materializes `EE-CO` first — maximality is a
/// property of the whole set, not of any single extension.
pub fn ee_pr(framework: &Framework, driver: &dyn SatDriver) -> Result<Vec<Extension>> {
    let complete: Vec<Extension> = ee_co(framework, driver).collect::<Result<_>>()?;
    Ok(maximal(&complete))
}

/// `SE-PR`: any one preferred extension.
///
/// A complete-extension enumeration is never empty (`∅`'s characteristic
/// fixed point is always complete), so this only returns `None` if the AF
/// somehow yields no complete extension at all — unreachable for
/// well-formed AFs.
pub fn se_pr(framework: &Framework, driver: &dyn SatDriver) -> Result<Option<Extension>> {
    Ok(ee_pr(framework, driver)?.into_iter().next())
}

/// `DC-X` for `X ∈ {CO, ST}`: true as soon as some emitted extension
/// contains `arg`; consumes the enumeration lazily and short-circuits.
pub fn dc_lazy<I>(extensions: I, arg: usize) -> Result<bool>
where
    I: Iterator<Item = Result<Extension>>,
{
    for ext in extensions {
        if ext?.contains(&arg) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `DS-X` for `X ∈ {CO, ST}`: false as soon as some emitted extension omits
/// `arg`; consumes the enumeration lazily and short-circuits. Vacuously true
/// if the sequence is empty.
pub fn ds_lazy<I>(extensions: I, arg: usize) -> Result<bool>
where
    I: Iterator<Item = Result<Extension>>,
{
    for ext in extensions {
        if !ext?.contains(&arg) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `DC-X` for `X ∈ {CO, PR, ST}` over an already-materialized extension set
/// (used for PR, whose `EE-PR` cannot be produced lazily).
pub fn dc_materialized(extensions: &[Extension], arg: usize) -> bool {
    extensions.iter().any(|e| e.contains(&arg))
}

/// `DS-X` for `X ∈ {CO, PR, ST}` over an already-materialized extension set.
pub fn ds_materialized(extensions: &[Extension], arg: usize) -> bool {
    extensions.iter().all(|e| e.contains(&arg))
}

/// `DC-CO`.
pub fn dc_co(framework: &Framework, arg: usize, driver: &dyn SatDriver) -> Result<bool> {
    dc_lazy(ee_co(framework, driver), arg)
}

/// `DS-CO`.
pub fn ds_co(framework: &Framework, arg: usize, driver: &dyn SatDriver) -> Result<bool> {
    ds_lazy(ee_co(framework, driver), arg)
}

/// `DC-ST`.
pub fn dc_st(framework: &Framework, arg: usize, driver: &dyn SatDriver) -> Result<bool> {
    dc_lazy(ee_st(framework, driver), arg)
}

/// `DS-ST`.
pub fn ds_st(framework: &Framework, arg: usize, driver: &dyn SatDriver) -> Result<bool> {
    ds_lazy(ee_st(framework, driver), arg)
}

/// `DC-PR`.
pub fn dc_pr(framework: &Framework, arg: usize, driver: &dyn SatDriver) -> Result<bool> {
    Ok(dc_materialized(&ee_pr(framework, driver)?, arg))
}

/// `DS-PR`.
pub fn ds_pr(framework: &Framework, arg: usize, driver: &dyn SatDriver) -> Result<bool> {
    Ok(ds_materialized(&ee_pr(framework, driver)?, arg))
}
