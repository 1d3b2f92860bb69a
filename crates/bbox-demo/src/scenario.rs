// File: crates/bbox-demo/src/scenario.rs
// Summary: Box scenarios for the demo: the four built-in examples and a CSV loader.

use anyhow::{bail, Context, Result};
use bbox_core::{Bounds, Rgb, Style};
use std::path::Path;

pub struct Scenario {
    pub name: String,
    pub bounds: Bounds,
    pub style: Style,
}

impl Scenario {
    fn new(name: &str, top_left: (i32, i32), bottom_right: (i32, i32), style: Style) -> Result<Self> {
        let bounds = Bounds::new(top_left, bottom_right).with_context(|| format!("box '{name}'"))?;
        Ok(Self { name: name.to_string(), bounds, style })
    }
}

/// Red thin arms, purple clamped arms, green arcs only, blue square corners.
pub fn builtin_scenarios() -> Result<Vec<Scenario>> {
    Ok(vec![
        Scenario::new("example_1", (50, 50), (350, 250), Style::new(Rgb::RED, 3, 20, 20))?,
        Scenario::new("example_2", (50, 50), (350, 250), Style::new(Rgb::new(204, 50, 150), 40, 10, 250))?,
        Scenario::new("example_3", (100, 100), (300, 200), Style::new(Rgb::GREEN, 10, 35, 0))?,
        Scenario::new("example_4", (120, 60), (280, 240), Style::new(Rgb::BLUE, 4, 0, 25))?,
    ])
}

pub fn load_scenarios_csv(path: &Path) -> Result<Vec<Scenario>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_scenarios(rdr)
}

/// Columns: name,x1,y1,x2,y2,r,g,b,thickness,radius,arm (any order, case-insensitive).
/// `name` is optional; rows without one are numbered.
pub fn read_scenarios<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Scenario>> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);

    let idx = |name: &str| headers.iter().position(|h| h == name);
    let required = ["x1", "y1", "x2", "y2", "r", "g", "b", "thickness", "radius", "arm"];
    let mut cols = [0usize; 10];
    for (slot, name) in cols.iter_mut().zip(required) {
        *slot = idx(name).with_context(|| format!("missing column '{name}'"))?;
    }
    let i_name = idx("name");

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = row + 2; // header is line 1
        let field = |i: usize| rec.get(cols[i]).unwrap_or("");
        let int = |i: usize| -> Result<i32> {
            field(i).parse::<i32>().with_context(|| format!("line {line}: bad {} '{}'", required[i], field(i)))
        };
        let uint = |i: usize| -> Result<u32> {
            field(i).parse::<u32>().with_context(|| format!("line {line}: bad {} '{}'", required[i], field(i)))
        };
        let channel = |i: usize| -> Result<u8> {
            field(i).parse::<u8>().with_context(|| format!("line {line}: bad {} '{}'", required[i], field(i)))
        };

        let name = match i_name.and_then(|i| rec.get(i)).filter(|s| !s.is_empty()) {
            Some(n) => n.to_string(),
            None => format!("box_{}", row + 1),
        };
        let style = Style::default()
            .with_color((channel(4)?, channel(5)?, channel(6)?))
            .with_thickness(uint(7)?)
            .with_border_radius(uint(8)?)
            .with_arm_length(uint(9)?);
        if let Err(e) = style.validate() {
            bail!("line {line}: {e}");
        }
        let sc = Scenario::new(&name, (int(0)?, int(1)?), (int(2)?, int(3)?), style)
            .with_context(|| format!("line {line}"))?;
        out.push(sc);
    }
    if out.is_empty() {
        bail!("no boxes found");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Vec<Scenario>> {
        let rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(text.as_bytes());
        read_scenarios(rdr)
    }

    #[test]
    fn builtins_are_valid() {
        let all = builtin_scenarios().unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[1].style.arm_length, 250);
    }

    #[test]
    fn reads_rows_in_any_column_order() {
        let all = read(
            "arm,radius,thickness,b,g,r,y2,x2,y1,x1,Name\n\
             20,20,3,0,0,255,250,350,50,50,first\n\
             0,35,10,0,255,0,200,300,100,100,\n",
        )
        .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "first");
        assert_eq!(all[0].style, Style::new(Rgb::RED, 3, 20, 20));
        assert_eq!(all[0].bounds, Bounds::from_ltrb(50, 50, 350, 250).unwrap());
        assert_eq!(all[1].name, "box_2");
    }

    #[test]
    fn rejects_inverted_box_with_line_number() {
        let err = read(
            "x1,y1,x2,y2,r,g,b,thickness,radius,arm\n\
             300,200,100,100,0,0,0,2,10,10\n",
        )
        .err()
        .expect("inverted box must fail");
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn rejects_bad_numbers_and_missing_columns() {
        assert!(read("x1,y1,x2,y2,r,g,b,thickness,radius,arm\n0,0,10,10,300,0,0,2,1,1\n").is_err());
        assert!(read("x1,y1,x2,y2,r,g,b,thickness,radius,arm\n0,0,10,10,0,0,0,-2,1,1\n").is_err());
        assert!(read("x1,y1,x2,y2,r,g,b,thickness,radius,arm\n0,0,10,10,0,0,0,0,1,1\n").is_err());
        assert!(read("x1,y1,x2,y2,r,g,b,thickness,radius\n0,0,10,10,0,0,0,2,1\n").is_err());
    }
}
