//! Write a small `chicago.csv`-shaped sample file for trying the explorer
//! without the real city extracts.

use chrono::{Duration, NaiveDate};

/// Minimal deterministic PRNG (splitmix64), so the sample is reproducible.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform pick in `0..n`.
    fn pick(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let stations = [
        "Streeter Dr & Grand Ave",
        "Clinton St & Washington Blvd",
        "Theater on the Lake",
        "Lake Shore Dr & Monroe St",
        "Michigan Ave & Oak St",
        "Canal St & Adams St",
    ];
    let user_types = ["Subscriber", "Subscriber", "Subscriber", "Customer"];
    let genders = ["Male", "Male", "Female", ""];

    let output_path = "chicago.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
            "Gender",
            "Birth Year",
        ])
        .expect("Failed to write header");

    let base = NaiveDate::from_ymd_opt(2017, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let rows = 500;
    for _ in 0..rows {
        // Spread starts across January–June, biased toward commute hours.
        let day = rng.pick(181) as i64;
        let hour = [8, 8, 9, 12, 17, 17, 18, 22][rng.pick(8)];
        let minute = rng.pick(60) as i64;
        let start = base + Duration::days(day) + Duration::hours(hour) + Duration::minutes(minute);

        let duration_secs = 120 + rng.pick(3000) as i64;
        let end = start + Duration::seconds(duration_secs);

        let start_station = stations[rng.pick(stations.len())];
        let end_station = stations[rng.pick(stations.len())];
        let user_type = user_types[rng.pick(user_types.len())];
        let gender = genders[rng.pick(genders.len())];
        let birth_year = if gender.is_empty() {
            String::new()
        } else {
            format!("{}.0", 1950 + rng.pick(55))
        };

        let start_s = start.format("%Y-%m-%d %H:%M:%S").to_string();
        let end_s = end.format("%Y-%m-%d %H:%M:%S").to_string();
        let duration_s = format!("{duration_secs}.0");

        writer
            .write_record([
                start_s.as_str(),
                end_s.as_str(),
                duration_s.as_str(),
                start_station,
                end_station,
                user_type,
                gender,
                birth_year.as_str(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} trips to {output_path}");
}
