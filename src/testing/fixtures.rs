//! Ready-made groups for common combination scenarios.

use crate::record::Record;
use crate::testing::builders::GroupBuilder;

/// Three T-shirt sizes under the key `size`.
///
/// # Example
///
/// ```
/// use crossmerge::testing::sample_sizes;
///
/// assert_eq!(sample_sizes().len(), 3);
/// ```
#[must_use]
pub fn sample_sizes() -> Vec<Record> {
    GroupBuilder::new().add_values("size", ["S", "M", "L"]).build()
}

/// Two colors under the key `color`, each with a `sku_suffix`.
#[must_use]
pub fn sample_colors() -> Vec<Record> {
    vec![
        crate::record! { "color" => "red", "sku_suffix" => "R" },
        crate::record! { "color" => "blue", "sku_suffix" => "B" },
    ]
}

/// Two materials; each also sets `sku_suffix`, overriding the color's.
#[must_use]
pub fn sample_materials() -> Vec<Record> {
    vec![
        crate::record! { "material" => "cotton", "sku_suffix" => "C" },
        crate::record! { "material" => "wool", "sku_suffix" => "W" },
    ]
}

/// `sample_sizes`, `sample_colors` and `sample_materials`, in that order.
///
/// ```
/// use crossmerge::combine;
/// use crossmerge::testing::product_catalog_groups;
///
/// let variants = combine(&product_catalog_groups());
/// assert_eq!(variants.len(), 3 * 2 * 2);
/// ```
#[must_use]
pub fn product_catalog_groups() -> Vec<Vec<Record>> {
    vec![sample_sizes(), sample_colors(), sample_materials()]
}

/// `n` records `{key: 0}`, `{key: 1}`, ... `{key: n-1}`.
#[must_use]
pub fn numbered_group(key: &str, n: u64) -> Vec<Record> {
    GroupBuilder::new().add_values(key, 0..n).build()
}
