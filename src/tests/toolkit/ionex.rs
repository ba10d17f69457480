use itertools::Itertools;

/// Formats a header line: 60 bytes of content followed by the label
fn fmt_line(content: &str, label: &str) -> String {
    format!("{:<60}{}\n", content, label)
}

/// Specifications of one TEC map to generate
#[derive(Debug, Clone)]
pub struct MapSpecs {
    /// y, m, d, hh, mm, ss as written in EPOCH OF CURRENT MAP
    pub epoch: String,
    /// Raw sample (unscaled) at (row, col)
    pub sample: fn(usize, usize) -> i64,
}

impl MapSpecs {
    pub fn new(
        y: i32,
        m: u8,
        d: u8,
        hh: u8,
        mm: u8,
        ss: u8,
        sample: fn(usize, usize) -> i64,
    ) -> Self {
        Self {
            epoch: format!("{:6}{:6}{:6}{:6}{:6}{:6}", y, m, d, hh, mm, ss),
            sample,
        }
    }
}

/// IONEX content [Generator]
#[derive(Debug, Clone)]
pub struct Generator {
    /// EXPONENT to declare, if any
    pub exponent: Option<i32>,
    /// Latitude declaration (LAT1, LAT2, DLAT)
    pub latitude: (f64, f64, f64),
    /// Longitude declaration (LON1, LON2, DLON)
    pub longitude: (f64, f64, f64),
    /// Maps to generate
    pub maps: Vec<MapSpecs>,
}

impl Default for Generator {
    /// Global 2.5° x 5° grid, with 0.1 TECu resolution
    fn default() -> Self {
        Self {
            exponent: Some(-1),
            latitude: (87.5, -87.5, -2.5),
            longitude: (-180.0, 180.0, 5.0),
            maps: Vec::new(),
        }
    }
}

impl Generator {
    /// Adds one map per hour of given day, plus the closing midnight map.
    pub fn with_day_course(&self, y: i32, m: u8, d: u8, sample: fn(usize, usize) -> i64) -> Self {
        let mut s = self.clone();
        for hh in 0..24 {
            s.maps.push(MapSpecs::new(y, m, d, hh, 0, 0, sample));
        }
        s.maps.push(MapSpecs::new(y, m, d + 1, 0, 0, 0, sample));
        s
    }

    pub fn with_map(&self, map: MapSpecs) -> Self {
        let mut s = self.clone();
        s.maps.push(map);
        s
    }

    pub fn with_exponent(&self, exponent: Option<i32>) -> Self {
        let mut s = self.clone();
        s.exponent = exponent;
        s
    }

    pub fn with_latitude(&self, lat1: f64, lat2: f64, dlat: f64) -> Self {
        let mut s = self.clone();
        s.latitude = (lat1, lat2, dlat);
        s
    }

    pub fn with_longitude(&self, lon1: f64, lon2: f64, dlon: f64) -> Self {
        let mut s = self.clone();
        s.longitude = (lon1, lon2, dlon);
        s
    }

    fn nb_points(start: f64, end: f64, spacing: f64) -> usize {
        ((end - start) / spacing).round() as usize + 1
    }

    /// Generates the header section
    pub fn header(&self) -> String {
        let mut content = String::new();
        content.push_str(&fmt_line(
            "     1.0            IONOSPHERE MAPS     GPS",
            "IONEX VERSION / TYPE",
        ));
        content.push_str(&fmt_line("TECMAP              TEST", "PGM / RUN BY / DATE"));
        content.push_str(&fmt_line(
            &format!("{:6}", self.maps.len()),
            "# OF MAPS IN FILE",
        ));
        content.push_str(&fmt_line("  COSZ", "MAPPING FUNCTION"));
        content.push_str(&fmt_line("   450.0 450.0   0.0", "HGT1 / HGT2 / DHGT"));
        let (lat1, lat2, dlat) = self.latitude;
        content.push_str(&fmt_line(
            &format!("  {:6.1}{:6.1}{:6.1}", lat1, lat2, dlat),
            "LAT1 / LAT2 / DLAT",
        ));
        let (lon1, lon2, dlon) = self.longitude;
        content.push_str(&fmt_line(
            &format!("  {:6.1}{:6.1}{:6.1}", lon1, lon2, dlon),
            "LON1 / LON2 / DLON",
        ));
        if let Some(exponent) = self.exponent {
            content.push_str(&fmt_line(&format!("{:6}", exponent), "EXPONENT"));
        }
        content.push_str(&fmt_line("", "END OF HEADER"));
        content
    }

    /// Generates one TEC map
    pub fn map(&self, index: usize, specs: &MapSpecs) -> String {
        let (lat1, lat2, dlat) = self.latitude;
        let (lon1, lon2, dlon) = self.longitude;
        let rows = Self::nb_points(lat1, lat2, dlat);
        let cols = Self::nb_points(lon1, lon2, dlon);

        let mut content = fmt_line(&format!("{:6}", index + 1), "START OF TEC MAP");
        content.push_str(&fmt_line(&specs.epoch, "EPOCH OF CURRENT MAP"));
        for row in 0..rows {
            let lat = lat1 + row as f64 * dlat;
            content.push_str(&fmt_line(
                &format!("  {:6.1}{:6.1}{:6.1}{:6.1}{:6.1}", lat, lon1, lon2, dlon, 450.0),
                "LAT/LON1/LON2/DLON/H",
            ));
            // 16 samples per line
            for chunk in &(0..cols).chunks(16) {
                let line = chunk
                    .map(|col| format!("{:5}", (specs.sample)(row, col)))
                    .join("");
                content.push_str(&line);
                content.push('\n');
            }
        }
        content.push_str(&fmt_line(&format!("{:6}", index + 1), "END OF TEC MAP"));
        content
    }

    /// Generates complete IONEX content
    pub fn generate(&self) -> String {
        let mut content = self.header();
        for (index, specs) in self.maps.iter().enumerate() {
            content.push_str(&self.map(index, specs));
        }
        content.push_str(&fmt_line("", "END OF FILE"));
        content
    }
}
