use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Sí / No answer written the way hand-maintained sheets tend to spell it.
fn messy_yes_no(rng: &mut SimpleRng, p_yes: f64) -> &'static str {
    const YES: [&str; 5] = ["Sí", "SI", "si", " Sí ", "sí"];
    const NO: [&str; 4] = ["No", "NO", "no ", " no"];
    if rng.next_f64() < p_yes {
        rng.pick(&YES)
    } else {
        rng.pick(&NO)
    }
}

fn main() -> Result<(), XlsxError> {
    let mut rng = SimpleRng::new(42);

    let sectors = ["Metalurgia", "Educación", "Salud", "Transporte", "Comercio", "Minería"];
    let regions = ["Metropolitana", "Valparaíso", "Biobío", "Antofagasta", "Los Lagos"];
    let header = [
        "Sindicato",
        "Sector",
        "Región",
        "Afiliados",
        "NUEVOS REFORMA",
        "Legitimados",
        "REPOSITORIO",
    ];

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }

    let n_rows: u32 = 250;
    for row in 1..=n_rows {
        let sector = rng.pick(&sectors);
        worksheet.write_string(row, 0, format!("Sindicato {sector} N°{row}"))?;
        worksheet.write_string(row, 1, sector)?;
        worksheet.write_string(row, 2, rng.pick(&regions))?;
        worksheet.write_number(row, 3, (20.0 + rng.next_f64() * 980.0).round())?;
        worksheet.write_string(row, 4, messy_yes_no(&mut rng, 0.35))?;
        worksheet.write_string(row, 5, messy_yes_no(&mut rng, 0.6))?;
        // Leave some repository cells blank, as the real sheet does.
        if rng.next_f64() > 0.05 {
            worksheet.write_string(row, 6, messy_yes_no(&mut rng, 0.5))?;
        }
    }

    let output_path = "Sindicatos_limpio.xlsx";
    workbook.save(output_path)?;

    println!("Wrote {n_rows} unions to {output_path}");
    Ok(())
}
