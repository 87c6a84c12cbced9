use notus_indices::{
    pdinew_pdsi, pdsi, scpdsi, CalibrationPeriod, LegacyPalmerModel, PalmerModel, PalmerOutput,
    ScPalmerOutput,
};

/// Test double standing in for the external water-balance model: echoes a
/// recognizable function of its inputs so the delegation contract is
/// observable.
struct EchoPalmer;

impl PalmerModel for EchoPalmer {
    fn pdsi(
        &self,
        precip_inches: &[f64],
        pet_inches: &[f64],
        awc: f64,
        _data_start_year: i32,
        _calibration: &CalibrationPeriod,
    ) -> PalmerOutput {
        let z: Vec<f64> = precip_inches
            .iter()
            .zip(pet_inches)
            .map(|(&p, &e)| p - e)
            .collect();
        PalmerOutput {
            pdsi: z.iter().map(|v| v / awc).collect(),
            phdi: z.iter().map(|v| v * 0.9).collect(),
            z_index: z,
        }
    }

    fn scpdsi(
        &self,
        precip_inches: &[f64],
        pet_inches: &[f64],
        awc: f64,
        data_start_year: i32,
        calibration: &CalibrationPeriod,
    ) -> ScPalmerOutput {
        let base = self.pdsi(precip_inches, pet_inches, awc, data_start_year, calibration);
        ScPalmerOutput {
            scpdsi: base.pdsi.clone(),
            pmdi: base.phdi.clone(),
            pdsi: base.pdsi,
            phdi: base.phdi,
            z_index: base.z_index,
        }
    }
}

struct EchoLegacy;

impl LegacyPalmerModel for EchoLegacy {
    fn pdsi_from_climatology(
        &self,
        precip_inches: &[f64],
        temps: &[f64],
        _awc: f64,
        _latitude_degrees: f64,
        b: f64,
        h: f64,
        _data_start_year: i32,
        _calibration: &CalibrationPeriod,
    ) -> PalmerOutput {
        let z: Vec<f64> = precip_inches
            .iter()
            .zip(temps)
            .map(|(&p, &t)| p - t * b + h)
            .collect();
        PalmerOutput {
            pdsi: z.clone(),
            phdi: z.clone(),
            z_index: z,
        }
    }
}

#[test]
fn pdsi_delegates_untouched() {
    let precip = vec![2.0, 3.0, 1.0];
    let pet = vec![1.0, 1.5, 2.0];
    let calibration = CalibrationPeriod::new(2000, 2000).unwrap();

    let out = pdsi(&EchoPalmer, &precip, &pet, 5.0, 2000, &calibration);
    let direct = EchoPalmer.pdsi(&precip, &pet, 5.0, 2000, &calibration);
    assert_eq!(out, direct);
    assert_eq!(out.z_index, vec![1.0, 1.5, -1.0]);
}

#[test]
fn scpdsi_returns_five_series() {
    let precip = vec![2.0, 3.0];
    let pet = vec![1.0, 1.0];
    let calibration = CalibrationPeriod::new(2000, 2000).unwrap();

    let out = scpdsi(&EchoPalmer, &precip, &pet, 5.0, 2000, &calibration);
    assert_eq!(out.scpdsi.len(), 2);
    assert_eq!(out.pdsi.len(), 2);
    assert_eq!(out.phdi.len(), 2);
    assert_eq!(out.pmdi.len(), 2);
    assert_eq!(out.z_index.len(), 2);
}

#[test]
fn legacy_delegates_every_argument() {
    let precip = vec![10.0, 20.0];
    let temps = vec![2.0, 4.0];
    let calibration = CalibrationPeriod::new(1950, 1950).unwrap();

    let out = pdinew_pdsi(
        &EchoLegacy,
        &precip,
        &temps,
        5.0,
        38.0,
        3.0,
        1.0,
        1950,
        &calibration,
    );
    // p - t*b + h
    assert_eq!(out.z_index, vec![10.0 - 6.0 + 1.0, 20.0 - 12.0 + 1.0]);
}
