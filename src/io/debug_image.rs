//! PNG rendering of lattice occupancy with grid lines

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::grid::TileGrid;
use crate::io::configuration::{EMPTY_TILE_COLOR, GRID_LINE_COLOR, TILE_PALETTE};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::tiles::{Tile, TileFactory, TileKind};

/// Fill colour for a cell holding a tile of `kind`, transparent when vacant
pub fn cell_color(kind: Option<TileKind>) -> [u8; 4] {
    match kind {
        None => [0, 0, 0, 0],
        Some(TileKind::Empty) => EMPTY_TILE_COLOR,
        Some(TileKind::Populated(category)) => TILE_PALETTE
            .get(category as usize % TILE_PALETTE.len())
            .copied()
            .unwrap_or(EMPTY_TILE_COLOR),
    }
}

/// Draw one square per cell with a one-pixel border on every cell edge
///
/// Row `y = 0` is drawn at the bottom of the image.
///
/// # Errors
///
/// Returns `InvalidParameter` if `pixels_per_cell` is below 2 or the image
/// would not fit in `u32` dimensions.
pub fn render_lattice<F: TileFactory>(
    grid: &TileGrid<F>,
    pixels_per_cell: u32,
) -> Result<RgbaImage> {
    if pixels_per_cell < 2 {
        return Err(invalid_parameter(
            "pixels_per_cell",
            &pixels_per_cell,
            &"at least two pixels are needed to draw a cell and its border",
        ));
    }

    let (width, height, _) = grid.map_settings();
    let image_width = image_extent(width, pixels_per_cell)?;
    let image_height = image_extent(height, pixels_per_cell)?;

    let mut img = ImageBuffer::new(image_width, image_height);

    for ((x, y), cell) in grid.lattice().iter() {
        let fill = Rgba(cell_color(cell.tile().map(Tile::kind)));
        let left = x as u32 * pixels_per_cell;
        // Image rows grow downwards, lattice rows grow upwards
        let top = (height as u32 - 1 - y as u32) * pixels_per_cell;

        for dx in 0..pixels_per_cell {
            for dy in 0..pixels_per_cell {
                let on_border = dx == 0
                    || dy == 0
                    || dx == pixels_per_cell - 1
                    || dy == pixels_per_cell - 1;
                let color = if on_border { Rgba(GRID_LINE_COLOR) } else { fill };
                img.put_pixel(left + dx, top + dy, color);
            }
        }
    }

    Ok(img)
}

/// Render the grid and write it as a PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - rendering parameters are invalid
/// - the parent directory cannot be created
/// - the image cannot be saved to the specified path
pub fn export_grid_as_png<F: TileFactory>(
    grid: &TileGrid<F>,
    pixels_per_cell: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_lattice(grid, pixels_per_cell)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn image_extent(cells: usize, pixels_per_cell: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(pixels_per_cell))
        .ok_or_else(|| {
            invalid_parameter(
                "pixels_per_cell",
                &pixels_per_cell,
                &format!("{cells} cells do not fit in an image"),
            )
        })
}
