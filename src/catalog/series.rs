use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    compositor::{
        compose::compose_navicue_with,
        input::{CompositorInput, NaviCueBundle},
    },
    foundation::error::{NaviCueError, NaviCueResult},
    safety::clamps::ClampContext,
    taxonomy::{
        axes::{InteractionHook, KbeAxis, TimeContext},
        form::Form,
        mechanism::Mechanism,
        signature::SignatureKey,
    },
};

/// Largest number of seeds one series may span.
pub const MAX_SERIES_LEN: u64 = 100_000;
/// Largest number of specimens a whole catalog may expand to.
pub const MAX_CATALOG_LEN: u64 = 1_000_000;

/// One series of specimens sharing every input but the seed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesSpec {
    /// Series name for authoring/debugging.
    pub name: String,
    /// Shared signature.
    pub signature: SignatureKey,
    /// Shared form.
    pub form: Form,
    /// Shared time-of-day context.
    pub chrono: TimeContext,
    /// Shared KBE axis.
    pub kbe: KbeAxis,
    /// Shared interaction hook.
    pub hook: InteractionHook,
    /// Shared mechanism label.
    #[serde(default)]
    pub mechanism: Mechanism,
    /// Inclusive seed range `[start, end]`.
    pub seeds: [i64; 2],
    /// Capstone seed, if the series has one. Must lie inside `seeds`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seal: Option<i64>,
}

impl SeriesSpec {
    /// Number of specimens in the series. Saturates at `u64::MAX` for the full `i64` range.
    pub fn len(&self) -> u64 {
        let span = i128::from(self.seeds[1]) - i128::from(self.seeds[0]) + 1;
        u64::try_from(span.max(0)).unwrap_or(u64::MAX)
    }

    /// Return `true` when the seed range is empty (reversed).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Input for one seed of this series.
    pub fn input(&self, specimen_seed: i64) -> CompositorInput {
        CompositorInput {
            signature: self.signature,
            form: self.form,
            chrono: self.chrono,
            kbe: self.kbe,
            hook: self.hook,
            specimen_seed,
            is_seal: self.seal == Some(specimen_seed),
            mechanism: self.mechanism.clone(),
        }
    }

    /// Every input of the series in seed order.
    pub fn inputs(&self) -> impl Iterator<Item = CompositorInput> + '_ {
        (self.seeds[0]..=self.seeds[1]).map(move |s| self.input(s))
    }
}

/// A specimen catalog: a list of series with globally unique seeds.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Series in authoring order.
    pub series: Vec<SeriesSpec>,
}

impl Catalog {
    /// Parse a catalog from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> NaviCueResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| NaviCueError::serde(format!("parse catalog JSON: {e}")))
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> NaviCueResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            NaviCueError::validation(format!("open catalog JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check names, ranges, sizes, seals and global seed uniqueness.
    pub fn validate(&self) -> NaviCueResult<()> {
        // start -> (end, series name), for overlap detection.
        let mut ranges: BTreeMap<i64, (i64, &str)> = BTreeMap::new();
        for s in &self.series {
            if s.name.trim().is_empty() {
                return Err(NaviCueError::validation("series name must be non-empty"));
            }
            let [start, end] = s.seeds;
            if start > end {
                return Err(NaviCueError::validation(format!(
                    "series '{}' seed range start must be <= end",
                    s.name
                )));
            }
            if s.len() > MAX_SERIES_LEN {
                return Err(NaviCueError::validation(format!(
                    "series '{}' spans {} seeds (maximum {MAX_SERIES_LEN})",
                    s.name,
                    s.len()
                )));
            }
            if let Some(seal) = s.seal
                && !(start..=end).contains(&seal)
            {
                return Err(NaviCueError::validation(format!(
                    "series '{}' seal {seal} lies outside [{start}, {end}]",
                    s.name
                )));
            }
            if let Some((&prev_start, &(prev_end, prev_name))) = ranges.range(..=end).next_back()
                && prev_end >= start
            {
                return Err(NaviCueError::validation(format!(
                    "series '{}' seeds [{start}, {end}] overlap series '{prev_name}' [{prev_start}, {prev_end}]",
                    s.name
                )));
            }
            if let Some((&next_start, &(next_end, next_name))) = ranges.range(start..).next()
                && next_start <= end
            {
                return Err(NaviCueError::validation(format!(
                    "series '{}' seeds [{start}, {end}] overlap series '{next_name}' [{next_start}, {next_end}]",
                    s.name
                )));
            }
            ranges.insert(start, (end, s.name.as_str()));
        }
        let total = self.len();
        if total > MAX_CATALOG_LEN {
            return Err(NaviCueError::validation(format!(
                "catalog expands to {total} specimens (maximum {MAX_CATALOG_LEN})"
            )));
        }
        Ok(())
    }

    /// Total number of specimens, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        self.series
            .iter()
            .map(SeriesSpec::len)
            .fold(0u64, |acc, n| acc.saturating_add(n))
    }

    /// Return `true` when the catalog has no specimens.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate and expand into one input per specimen, series by series.
    #[tracing::instrument(skip(self), fields(series = self.series.len()))]
    pub fn specimens(&self) -> NaviCueResult<Vec<CompositorInput>> {
        self.validate()?;
        let out: Vec<CompositorInput> = self.series.iter().flat_map(SeriesSpec::inputs).collect();
        tracing::debug!(specimens = out.len(), "expanded catalog");
        Ok(out)
    }

    /// Compose every specimen, sharing one clamp log across the catalog.
    pub fn compose_all(
        &self,
        ctx: &mut ClampContext,
    ) -> NaviCueResult<Vec<(CompositorInput, NaviCueBundle)>> {
        self.specimens()?
            .into_iter()
            .map(|input| {
                let bundle = compose_navicue_with(&input, ctx)?;
                Ok((input, bundle))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/series.rs"]
mod tests;
