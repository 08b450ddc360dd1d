//! Tests for the synthetic reading generator.

use vitalwatch_agent::collector::{ReadingGenerator, HR_RANGE, SPO2_RANGE, TEMP_RANGE};

#[test]
fn generated_readings_stay_in_simulated_ranges() {
    let generator = ReadingGenerator::new();

    for _ in 0..200 {
        let reading = generator.generate();

        assert!(HR_RANGE.contains(&reading.hr), "hr out of range: {}", reading.hr);
        assert!(
            SPO2_RANGE.contains(&reading.spo2) || reading.spo2 == 100.0,
            "spo2 out of range: {}",
            reading.spo2
        );
        assert!(
            TEMP_RANGE.contains(&reading.temp) || reading.temp == 40.5,
            "temp out of range: {}",
            reading.temp
        );
        assert!(reading.timestamp > 0.0);
    }
}

#[test]
fn generated_readings_pass_domain_validation() {
    let generator = ReadingGenerator::new();

    for _ in 0..200 {
        assert!(generator.generate().validate().is_ok());
    }
}

#[test]
fn generated_readings_have_one_decimal_of_precision() {
    let generator = ReadingGenerator::new();

    for _ in 0..50 {
        let reading = generator.generate();
        assert!(((reading.spo2 * 10.0).round() - reading.spo2 * 10.0).abs() < 1e-9);
        assert!(((reading.temp * 10.0).round() - reading.temp * 10.0).abs() < 1e-9);
    }
}
