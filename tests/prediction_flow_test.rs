use anyhow::Result;
use income_predictor::app::form::{FormSchema, Submission};
use income_predictor::domain::ports::RegressionModel;
use income_predictor::{
    bootstrap, encode, predict, Estimate, FeatureVector, FormInput, IncomeError, LocalStorage,
    TomlConfig,
};
use tempfile::TempDir;

const DATASET: &str = "\
data_ref,id_cliente,sexo,posse_de_veiculo,posse_de_imovel,qtd_filhos,tipo_renda,educacao,estado_civil,tipo_residencia,idade,tempo_emprego,qt_pessoas_residencia,renda
2015-01-01,15056,F,False,True,0,Empresário,Secundário,Solteiro,Casa,26,6.60,1.0,8060.34
2015-01-01,9968,M,True,True,0,Assalariado,Superior completo,Casado,Casa,28,7.18,2.0,1852.15
2015-01-01,4312,F,True,True,0,Empresário,Superior completo,Casado,Casa,35,0.83,2.0,2253.89
2015-01-01,4109,F,False,True,0,Pensionista,Secundário,Viúvo,Casa,67,,1.0,6600.77
2015-01-01,7000,M,False,False,1,Servidor público,Pós graduação,Casado,Casa,41,12.50,3.0,3500.10
2015-01-01,7001,F,True,False,2,Bolsista,Superior incompleto,Solteiro,Aluguel,22,1.10,4.0,900.00
2015-01-01,7002,M,True,True,0,Assalariado,Primário,Casado,Casa,59,20.00,2.0,1200.00
";

fn coefficients() -> Vec<f64> {
    vec![
        7.40, -0.77, 0.10, 0.22, 0.31, 0.45, 0.58, 0.83, 0.05, 0.37, 0.15, 0.02, 0.12, -0.09,
        -0.20, 0.01, 0.12, 0.05, 0.07,
    ]
}

struct Fixture {
    _dir: TempDir,
    config: TomlConfig,
}

fn fixture() -> Result<Fixture> {
    let dir = TempDir::new()?;
    let model_path = dir.path().join("modelo.json");
    let dataset_path = dir.path().join("renda.csv");

    let artifact = serde_json::json!({
        "name": "ols-log-renda",
        "target": "log_renda",
        "features": FeatureVector::NAMES,
        "coefficients": coefficients(),
    });
    std::fs::write(&model_path, artifact.to_string())?;
    std::fs::write(&dataset_path, DATASET)?;

    let config_path = dir.path().join("income.toml");
    std::fs::write(
        &config_path,
        format!(
            "[model]\npath = \"{}\"\n\n[dataset]\npath = \"{}\"\n",
            model_path.to_str().unwrap().replace('\\', "/"),
            dataset_path.to_str().unwrap().replace('\\', "/"),
        ),
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    Ok(Fixture { _dir: dir, config })
}

fn dot(features: &FeatureVector) -> f64 {
    coefficients()
        .iter()
        .zip(features.as_slice())
        .map(|(b, x)| b * x)
        .sum()
}

#[tokio::test]
async fn test_public_servant_prediction_end_to_end() -> Result<()> {
    let fixture = fixture()?;
    let engine = bootstrap(&LocalStorage::default(), &fixture.config).await?;

    let form = FormInput {
        sex: "Masculino".into(),
        age: Some(35),
        education: "Superior incompleto".into(),
        income_type: "Servidor público".into(),
        employment_months: Some(20),
        has_vehicle: true,
        has_property: false,
    };

    let Submission::Ready(raw) = engine.schema().accept(&form)? else {
        panic!("form should be complete");
    };
    let features = encode(&raw);
    assert_eq!(features.get(FeatureVector::TENURE_18_23), 1.0);
    assert_eq!(features.get(FeatureVector::INCOME_PUBLIC_SERVANT), 1.0);
    assert_eq!(features.get(FeatureVector::HIGHER_ED), 0.0);

    let estimate = engine.evaluate(&form)?;
    let expected = dot(&features).exp();
    assert!((estimate.income().value() - expected).abs() < 1e-9);
    assert_eq!(estimate, Estimate::Predicted(predict(&features, engine.model())));
    assert_eq!(engine.model().predict(&features), dot(&features));

    Ok(())
}

#[tokio::test]
async fn test_retiree_ignores_age_and_tenure() -> Result<()> {
    let fixture = fixture()?;
    let engine = bootstrap(&LocalStorage::default(), &fixture.config).await?;

    let retiree = |age, months| FormInput {
        sex: "Feminino".into(),
        age: Some(age),
        education: "Secundário".into(),
        income_type: "Pensionista".into(),
        employment_months: Some(months),
        has_vehicle: false,
        has_property: true,
    };

    let a = engine.evaluate(&retiree(20, 0))?;
    let b = engine.evaluate(&retiree(67, 99))?;
    assert_eq!(a, b);

    let mut retiree_vector = [0.0; FeatureVector::LEN];
    for slot in [
        FeatureVector::INTERCEPT,
        FeatureVector::SEX_FEMALE,
        FeatureVector::TENURE_RETIREE,
        FeatureVector::INCOME_RETIREE,
        FeatureVector::AGE_RETIREE,
        FeatureVector::HAS_PROPERTY,
    ] {
        retiree_vector[slot] = 1.0;
    }
    let expected = dot(&FeatureVector::from(retiree_vector)).exp();
    assert!((a.income().value() - expected).abs() < 1e-9);

    Ok(())
}

#[tokio::test]
async fn test_incomplete_form_displays_placeholder() -> Result<()> {
    let fixture = fixture()?;
    let engine = bootstrap(&LocalStorage::default(), &fixture.config).await?;

    let form = FormInput {
        sex: "Feminino".into(),
        age: Some(30),
        education: "".into(),
        income_type: "Assalariado".into(),
        employment_months: Some(12),
        has_vehicle: true,
        has_property: true,
    };

    let estimate = engine.evaluate(&form)?;
    assert_eq!(estimate, Estimate::Incomplete);
    assert_eq!(estimate.to_string(), "R$ 0,00");

    Ok(())
}

#[tokio::test]
async fn test_schema_bounds_come_from_dataset() -> Result<()> {
    let fixture = fixture()?;
    let engine = bootstrap(&LocalStorage::default(), &fixture.config).await?;
    let schema: &FormSchema = engine.schema();

    assert_eq!(schema.age_min, 18);
    assert_eq!(schema.age_max, 67);
    assert_eq!(schema.employment_months_max, 99);
    assert_eq!(schema.education.first().map(String::as_str), Some(""));
    assert_eq!(schema.education.len(), 6);
    assert!(schema.income_types.iter().any(|t| t == "Bolsista"));

    Ok(())
}

#[tokio::test]
async fn test_unreadable_model_aborts_startup() -> Result<()> {
    let fixture = fixture()?;
    let mut config = fixture.config.clone();
    config.model.path = "/definitely/not/here/modelo.json".to_string();

    let err = bootstrap(&LocalStorage::default(), &config).await.err().unwrap();
    assert!(matches!(err, IncomeError::ModelLoadError { .. }));
    assert_eq!(err.exit_code(), 3);

    Ok(())
}
