use crate::models::{Alignment, Layout, Placement};
use crate::stack::{Result, StackError};

/// Lays out images of the given `(width, height)` top to bottom.
pub fn compute_layout(sizes: &[(u32, u32)], spacing: u32, alignment: Alignment) -> Result<Layout> {
    if sizes.is_empty() {
        return Err(StackError::Input("No images selected!".to_string()));
    }

    let width = sizes.iter().map(|&(w, _)| w).max().unwrap_or(0);
    let gaps = (sizes.len() as u64 - 1) * spacing as u64;
    let total_height = sizes.iter().map(|&(_, h)| h as u64).sum::<u64>() + gaps;
    let height = u32::try_from(total_height)
        .map_err(|_| StackError::InvalidDimensions(width as u64, total_height))?;
    if width == 0 || height == 0 {
        return Err(StackError::InvalidDimensions(width as u64, height as u64));
    }

    let mut placements = Vec::with_capacity(sizes.len());
    let mut y = 0u32;
    for &(w, h) in sizes {
        placements.push(Placement {
            x: alignment.offset(width, w),
            y,
            width: w,
            height: h,
        });
        y = y.saturating_add(h).saturating_add(spacing);
    }

    Ok(Layout {
        width,
        height,
        placements,
    })
}
