//! Piecewise-linear selector <-> microvolt mapping.
//!
//! A regulator's voltage table is an ordered list of [`LinearRange`]s. Each
//! range covers an inclusive selector interval over which the output grows by a
//! fixed step; a zero step describes a flat (fixed voltage) interval. Ranges are
//! sorted by `min_sel`. Intervals may touch or overlap at their edges; on
//! overlap the earlier range owns the selector.

/// One arithmetic segment of a voltage table.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LinearRange {
    pub min_uv: u32,
    pub min_sel: u8,
    pub max_sel: u8,
    pub step_uv: u32,
}

impl LinearRange {
    pub const fn new(min_uv: u32, min_sel: u8, max_sel: u8, step_uv: u32) -> Self {
        Self {
            min_uv,
            min_sel,
            max_sel,
            step_uv,
        }
    }

    /// Whether `selector` falls inside this range.
    pub const fn contains(&self, selector: u8) -> bool {
        self.min_sel <= selector && selector <= self.max_sel
    }

    /// Output of `selector` computed with this range's formula, `None` outside
    /// the range or past `u32::MAX` microvolts.
    pub const fn voltage(&self, selector: u8) -> Option<u32> {
        if !self.contains(selector) {
            return None;
        }
        match ((selector - self.min_sel) as u32).checked_mul(self.step_uv) {
            Some(delta) => self.min_uv.checked_add(delta),
            None => None,
        }
    }

    /// Highest output this range produces.
    pub const fn max_uv(&self) -> Option<u32> {
        self.voltage(self.max_sel)
    }
}

/// First selector of `range` not already owned by an earlier range.
fn first_owned_selector(ranges: &[LinearRange], pos: usize) -> Option<u8> {
    let range = &ranges[pos];
    let mut first = range.min_sel;
    for earlier in &ranges[..pos] {
        if earlier.contains(first) {
            if earlier.max_sel >= range.max_sel {
                return None;
            }
            first = earlier.max_sel + 1;
        }
    }
    (first <= range.max_sel).then_some(first)
}

/// Number of distinct selectors described by `ranges`.
pub fn count_voltages(ranges: &[LinearRange]) -> u16 {
    (0..ranges.len())
        .filter_map(|pos| {
            first_owned_selector(ranges, pos).map(|first| (ranges[pos].max_sel - first) as u16 + 1)
        })
        .sum()
}

/// Output of the `index`-th valid selector, walking ranges in order.
pub fn list_voltage(ranges: &[LinearRange], index: u16) -> Option<u32> {
    let mut index = index;
    for (pos, range) in ranges.iter().enumerate() {
        let Some(first) = first_owned_selector(ranges, pos) else {
            continue;
        };
        let count = (range.max_sel - first) as u16 + 1;
        if index < count {
            return range.voltage(first + index as u8);
        }
        index -= count;
    }
    None
}

/// Output of a raw register `selector`; the first range containing it wins.
pub fn selector_voltage(ranges: &[LinearRange], selector: u8) -> Option<u32> {
    ranges
        .iter()
        .find(|range| range.contains(selector))
        .and_then(|range| range.voltage(selector))
}

/// Selector producing the lowest output at or above `max(target_uv, min_uv)`
/// and at or below `max_uv`.
pub fn map_voltage(ranges: &[LinearRange], target_uv: u32, min_uv: u32, max_uv: u32) -> Option<u8> {
    let floor = target_uv.max(min_uv);
    if floor > max_uv {
        return None;
    }
    for range in ranges {
        let Some(top_uv) = range.max_uv() else {
            continue;
        };
        if top_uv < floor || range.min_uv > max_uv {
            continue;
        }
        let wanted = floor.max(range.min_uv);
        let offset = if range.step_uv == 0 {
            0
        } else {
            (wanted - range.min_uv).div_ceil(range.step_uv)
        };
        let Ok(offset) = u8::try_from(offset) else {
            continue;
        };
        let mut candidate = range.min_sel.checked_add(offset);
        while let Some(sel) = candidate.filter(|&sel| sel <= range.max_sel) {
            // A selector shadowed by an earlier range reports that range's output.
            let uv = selector_voltage(ranges, sel)?;
            if uv > max_uv {
                break;
            }
            if uv >= floor {
                return Some(sel);
            }
            candidate = sel.checked_add(1);
        }
    }
    None
}
