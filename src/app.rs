use crate::chiller::sizing::ChillerSizingError;
use crate::config::Config;
use crate::conversion;
use crate::fluid_db::UnknownFluid;
use crate::i18n::{self, Translator};
use crate::layout::LayoutError;
use crate::piping::sizing::PipeSizingError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 배관 사이징 오류
    Pipe(PipeSizingError),
    /// 칠러 구성 탐색 오류
    Chiller(ChillerSizingError),
    /// 레이아웃 파싱/검증 오류
    Layout(LayoutError),
    /// 알 수 없는 유체 코드
    Fluid(UnknownFluid),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Pipe(e) => write!(f, "배관 계산 오류: {e}"),
            AppError::Chiller(e) => write!(f, "칠러 계산 오류: {e}"),
            AppError::Layout(e) => write!(f, "레이아웃 오류: {e}"),
            AppError::Fluid(e) => write!(f, "유체 조회 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<PipeSizingError> for AppError {
    fn from(value: PipeSizingError) -> Self {
        AppError::Pipe(value)
    }
}

impl From<ChillerSizingError> for AppError {
    fn from(value: ChillerSizingError) -> Self {
        AppError::Chiller(value)
    }
}

impl From<LayoutError> for AppError {
    fn from(value: LayoutError) -> Self {
        AppError::Layout(value)
    }
}

impl From<UnknownFluid> for AppError {
    fn from(value: UnknownFluid) -> Self {
        AppError::Fluid(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::QuickSizing => ui_cli::handle_quick_sizing(tr, config)?,
            MenuChoice::LayoutAnalysis => ui_cli::handle_layout_analysis(tr, config)?,
            MenuChoice::ChillerSizing => ui_cli::handle_chiller_sizing(tr, config)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
