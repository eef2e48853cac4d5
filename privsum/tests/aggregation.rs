//! End-to-end aggregation scenarios: contributors encrypt their values, an untrusted aggregator
//! combines them with nothing but the public key, and the key owner decrypts only the final
//! result.

use privsum::cryptosystems::paillier::Paillier;
use privsum::encoding::FixedPointCodec;
use privsum::privsum_traits::cryptosystems::{
    AsymmetricCryptosystem, DecryptionKey, EncryptionKey,
};
use privsum::privsum_traits::randomness::GeneralRng;
use privsum::privsum_traits::security::BitsOfSecurity;
use rand_core::OsRng;
use rug::Integer;

#[test]
fn test_salary_total_with_bonus() {
    let mut rng = GeneralRng::new(OsRng);

    let paillier = Paillier::setup(&BitsOfSecurity::ToyParameters);
    let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

    let codec = FixedPointCodec::new(1);
    let salaries = [50_000.0, 70_000.0, 90_000.0];

    let encrypted: Vec<_> = salaries
        .iter()
        .map(|salary| {
            let plaintext = codec.encode(*salary, &pk.n).unwrap();
            pk.encrypt(&plaintext, &mut rng).unwrap()
        })
        .collect();

    // The aggregator totals the payroll and applies a 10% raise as the integer factor 110
    let total = encrypted.into_iter().reduce(|a, b| a + b).unwrap();
    let raised = total * Integer::from(110);

    let payout_codec = FixedPointCodec::new(100);
    assert_eq!(payout_codec.decode(sk.decrypt(&raised), &pk.n), 231_000.0);
}

#[test]
fn test_weighted_risk_score() {
    let mut rng = GeneralRng::new(OsRng);

    let paillier = Paillier::setup(&BitsOfSecurity::ToyParameters);
    let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

    const WEIGHT_SCALE: u64 = 10_000;
    let feature_codec = FixedPointCodec::new(100);

    let features = [45.0, 28.5, 180.0];
    let weights = [0.3, 0.3, 0.4];

    let encrypted: Vec<_> = features
        .iter()
        .map(|feature| {
            let plaintext = feature_codec.encode(*feature, &pk.n).unwrap();
            pk.encrypt(&plaintext, &mut rng).unwrap()
        })
        .collect();

    // The aggregator weighs each feature with an integer weight and sums the results
    let score = encrypted
        .into_iter()
        .zip(weights.iter())
        .map(|(ciphertext, weight)| {
            ciphertext * Integer::from((weight * WEIGHT_SCALE as f64).round() as i64)
        })
        .reduce(|a, b| a + b)
        .unwrap();

    // Scales multiply, so the result decodes under the product of both scales
    let score_codec = FixedPointCodec::new(feature_codec.scale() * WEIGHT_SCALE);
    assert_eq!(score_codec.decode(sk.decrypt(&score), &pk.n), 94.05);
}

#[test]
fn test_marks_mean_and_variance() {
    let mut rng = GeneralRng::new(OsRng);

    let paillier = Paillier::setup(&BitsOfSecurity::ToyParameters);
    let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

    let codec = FixedPointCodec::new(1);
    let marks = [85.0, 90.0, 70.0, 95.0];

    // There is no ciphertext times ciphertext product, so the contributors also encrypt the
    // squares and the aggregator sums both streams separately.
    let total = marks
        .iter()
        .map(|mark| {
            pk.encrypt(&codec.encode(*mark, &pk.n).unwrap(), &mut rng)
                .unwrap()
        })
        .reduce(|a, b| a + b)
        .unwrap();
    let total_squares = marks
        .iter()
        .map(|mark| {
            pk.encrypt(&codec.encode(mark * mark, &pk.n).unwrap(), &mut rng)
                .unwrap()
        })
        .reduce(|a, b| a + b)
        .unwrap();

    let sum = codec.decode(sk.decrypt(&total), &pk.n);
    let sum_of_squares = codec.decode(sk.decrypt(&total_squares), &pk.n);

    assert_eq!(sum, 340.0);
    assert_eq!(sum_of_squares, 29_250.0);

    let count = marks.len() as f64;
    let mean = sum / count;
    let variance = sum_of_squares / count - mean * mean;

    assert_eq!(mean, 85.0);
    assert_eq!(variance, 87.5);
}

#[test]
fn test_power_usage_total_and_average() {
    let mut rng = GeneralRng::new(OsRng);

    let paillier = Paillier::setup(&BitsOfSecurity::ToyParameters);
    let (pk, sk) = paillier.generate_keys(&mut rng).unwrap();

    let codec = FixedPointCodec::new(100);
    let readings = [12.5, 9.8, 14.0, 11.6];

    let total = readings
        .iter()
        .map(|reading| {
            pk.encrypt(&codec.encode(*reading, &pk.n).unwrap(), &mut rng)
                .unwrap()
        })
        .reduce(|a, b| a + b)
        .unwrap();

    let total_usage = codec.decode(sk.decrypt(&total), &pk.n);

    assert_eq!(total_usage, 47.9);
    assert_eq!(total_usage / readings.len() as f64, 11.975);
}

#[test]
fn test_key_generation_is_probabilistic() {
    let mut rng = GeneralRng::new(OsRng);

    let paillier = Paillier::setup(&BitsOfSecurity::ToyParameters);
    let (pk_a, _) = paillier.generate_keys(&mut rng).unwrap();
    let (pk_b, _) = paillier.generate_keys(&mut rng).unwrap();

    assert_ne!(pk_a.n, pk_b.n);
}
