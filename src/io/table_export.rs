use anyhow::Context;

use crate::aggregate::table::RawTableRow;

/// Write the raw filtered table to `<out_dir>/<name>.csv` and return the file path.
pub fn write_raw_table_csv(
    out_dir: impl AsRef<std::path::Path>,
    name: &str,
    rows: &[RawTableRow],
) -> anyhow::Result<std::path::PathBuf> {
    anyhow::ensure!(
        rows.windows(2).all(|w| (w[0].year, w[0].month) <= (w[1].year, w[1].month)),
        "raw table rows must be sorted by (year, month)"
    );

    std::fs::create_dir_all(out_dir.as_ref()).context("create export dir failed")?;
    let path = out_dir.as_ref().join(format!("{}.csv", name));
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("create raw table export failed (path={:?})", path))?;
    for row in rows {
        wtr.serialize(row)
            .with_context(|| format!("write raw table row failed (year={}, month={})", row.year, row.month))?;
    }
    wtr.flush().context("flush raw table export failed")?;

    Ok(path)
}
