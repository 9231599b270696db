use vault_risk_engine::{
    config::RegistrySettings,
    error::RegistryError,
    models::{ComponentScores, MarketOutlook, Recommendation, RiskLevel},
    services::registry::VaultRegistry,
};

const OPERATOR: &str = "0x00000000000000000000000000000000000000aa";
const ASSESSOR: &str = "0x00000000000000000000000000000000000000bb";
const USER: &str = "0x00000000000000000000000000000000000000cc";

fn seeded_registry() -> VaultRegistry {
    let mut registry = VaultRegistry::new(RegistrySettings {
        operator: OPERATOR.to_string(),
        initial_protocol_risk_bps: 5_000,
    });
    registry.register_vault(USER, 1_000_000, 100).unwrap();
    registry.authorize_assessor(OPERATOR, ASSESSOR).unwrap();
    registry
}

fn stress_outlook() -> MarketOutlook {
    MarketOutlook {
        projected_tvl_change: -50,
        projected_volatility_change: 30,
        market_sentiment: 4_000,
        protocol_health: 9_000,
    }
}

#[test]
fn test_worked_forecast_example() {
    let mut registry = seeded_registry();
    let metrics = registry.store_mut().metrics_mut(1).unwrap();
    metrics.total_incidents = 1;
    metrics.largest_position_pct = 3_500;

    let forecast = registry.predict(1, &stress_outlook()).unwrap();

    // tvl_impact=10, volatility_impact=10, sentiment=300, health=66,
    // incidents=100, concentration=500 -> 5000 + 976 - 10 = 5966
    assert_eq!(forecast.current_risk_score, 5_000);
    assert_eq!(forecast.predicted_risk_score, 5_966);
    assert_eq!(forecast.predicted_risk_level, RiskLevel::Medium);
    assert_eq!(forecast.risk_change, 966);
    // 5966 sits below the 6000 warning floor
    assert_eq!(forecast.recommendation, Recommendation::ContinueNormal);
    assert_eq!(
        forecast.recommendation.to_string(),
        "safe: continue normal operations"
    );
}

#[test]
fn test_predict_is_a_pure_read() {
    let mut registry = seeded_registry();
    registry
        .update_scores(ASSESSOR, 1, ComponentScores::uniform(4_000), 110)
        .unwrap();
    let vault_before = registry.get_vault(1).unwrap().clone();
    let assessed_before = registry.store().total_vaults_assessed();

    let first = registry.predict(1, &stress_outlook()).unwrap();
    let second = registry.predict(1, &stress_outlook()).unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.get_vault(1).unwrap(), &vault_before);
    assert_eq!(registry.store().total_vaults_assessed(), assessed_before);
    assert_eq!(
        registry.store().assessor(ASSESSOR).unwrap().assessments_count,
        1
    );
}

#[test]
fn test_predict_unknown_vault() {
    let registry = seeded_registry();
    let err = registry.predict(42, &stress_outlook()).unwrap_err();
    assert_eq!(err, RegistryError::VaultNotFound { vault_id: 42 });
}

#[test]
fn test_predict_inactive_vault_reads_as_missing() {
    let mut registry = seeded_registry();
    registry.store_mut().vault_mut(1).unwrap().is_active = false;

    let err = registry.predict(1, &stress_outlook()).unwrap_err();
    assert_eq!(err, RegistryError::VaultNotFound { vault_id: 1 });
}

#[test]
fn test_predict_validates_sentiment_and_health() {
    let registry = seeded_registry();

    let mut outlook = stress_outlook();
    outlook.market_sentiment = 10_001;
    assert!(matches!(
        registry.predict(1, &outlook).unwrap_err(),
        RegistryError::InvalidParameters { .. }
    ));

    let mut outlook = stress_outlook();
    outlook.protocol_health = 20_000;
    assert!(matches!(
        registry.predict(1, &outlook).unwrap_err(),
        RegistryError::InvalidParameters { .. }
    ));
}

#[test]
fn test_risk_change_reports_improvement_as_zero() {
    let mut registry = seeded_registry();
    registry
        .update_scores(ASSESSOR, 1, ComponentScores::uniform(8_000), 110)
        .unwrap();

    // strong projected inflow against a calm market drags the forecast
    // below the current score
    let outlook = MarketOutlook {
        projected_tvl_change: 20_000,
        projected_volatility_change: 0,
        market_sentiment: 10_000,
        protocol_health: 10_000,
    };
    let forecast = registry.predict(1, &outlook).unwrap();

    assert!(forecast.predicted_risk_score < forecast.current_risk_score);
    assert_eq!(forecast.risk_change, 0);
}

#[test]
fn test_urgent_recommendation_at_critical_forecast() {
    let mut registry = seeded_registry();
    registry
        .update_scores(ASSESSOR, 1, ComponentScores::uniform(8_000), 110)
        .unwrap();
    registry.store_mut().metrics_mut(1).unwrap().total_incidents = 5;

    let outlook = MarketOutlook {
        projected_tvl_change: 0,
        projected_volatility_change: 0,
        market_sentiment: 10_000,
        protocol_health: 10_000,
    };
    let forecast = registry.predict(1, &outlook).unwrap();

    assert_eq!(forecast.predicted_risk_score, 8_500);
    assert_eq!(forecast.predicted_risk_level, RiskLevel::Critical);
    assert_eq!(forecast.recommendation, Recommendation::ReduceExposure);
    assert_eq!(forecast.recommendation.to_string(), "urgent: reduce exposure");
}
