use figment::Jail;
use plantilla_config::PlantillaConfig;

#[test]
fn env_overrides_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("PLANTILLA_GATEWAY__BASE_URL", "http://from-env:8001");
        let config = PlantillaConfig::load().expect("config loads");
        assert_eq!(config.gateway.base_url, "http://from-env:8001");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".plantilla")?;
        jail.create_file(
            ".plantilla/config.toml",
            "[gateway]\ntimeout_secs = 30\n",
        )?;
        jail.set_env("PLANTILLA_GATEWAY__TIMEOUT_SECS", "2");

        let config = PlantillaConfig::load().expect("config loads");
        assert_eq!(config.gateway.timeout_secs, 2);
        Ok(())
    });
}
