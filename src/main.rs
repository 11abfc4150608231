use clap::Parser;

use datacenter_pipe_sizer::piping::{flow, PipeSizingInput};
use datacenter_pipe_sizer::{app, config, fluid_db, i18n, piping, ui_cli};

/// Data Center Pipe Sizer CLI. `--mw` 지정 시 1회 계산 후 종료하고,
/// 지정하지 않으면 대화형 메뉴를 실행한다.
#[derive(Parser, Debug)]
#[command(name = "datacenter_pipe_sizer_cli", version)]
struct Cli {
    /// 총 냉각부하 [MW] (1회 계산 모드)
    #[arg(long)]
    mw: Option<f64>,
    /// 공급/환수 온도차 [°F]
    #[arg(long, default_value_t = 15.0)]
    delta_t: f64,
    /// 허용 유속 [ft/s]
    #[arg(long, default_value_t = 12.0)]
    velocity: f64,
    /// 100 ft 당 허용 압력손실 [psi]
    #[arg(long, default_value_t = 20.0)]
    max_dp: f64,
    /// 유체 코드 (water/glycol_30/glycol_50)
    #[arg(long, default_value = "water")]
    fluid: String,
    /// 언어 (auto/ko/en)
    #[arg(long, default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);

    if let Some(mw) = cli.mw {
        run_one_shot(&tr, &cfg, mw, &cli)?;
        return Ok(());
    }
    app::run(&mut cfg, &tr)?;
    Ok(())
}

/// 플래그 입력만으로 주 배관 사이징과 칠러 추천을 출력한다.
fn run_one_shot(
    tr: &i18n::Translator,
    cfg: &config::Config,
    mw: f64,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let (density, viscosity) =
        fluid_db::fluid_properties(fluid_db::standard_fluids(), &cli.fluid)?;
    let input = PipeSizingInput {
        mass_flow_lb_per_h: flow::mw_to_mass_flow_lb_per_h(mw, cli.delta_t),
        density_lb_per_ft3: density,
        viscosity_lb_per_ft_s: viscosity,
        max_velocity_ft_per_s: cli.velocity,
        max_pressure_drop_psi: cli.max_dp,
    };
    let result = piping::size_pipe(&input, piping::schedule_40())?;
    ui_cli::print_sizing_result(tr, cfg, &result);
    ui_cli::run_chiller_recommendation(tr, cfg, mw);
    Ok(())
}
