use clap::Parser;
use velobrava_contact::adapters::{AutoConfirm, ConsoleNotifier, StdinConfirm, StdoutNavigator, SystemClock};
use velobrava_contact::config::cli::{Command, FormArgs};
use velobrava_contact::core::security::inspect_whatsapp_url;
use velobrava_contact::domain::ports::Confirmer;
use velobrava_contact::utils::error::{ContactError, ErrorSeverity};
use velobrava_contact::utils::{logger, validation::Validate};
use velobrava_contact::{
    encode_whatsapp_message, Catalog, CliConfig, ContactHandler,
    RateLimiter, SecureOpener, SiteConfig,
};

type CliHandler<'a> =
    ContactHandler<ConsoleNotifier, StdoutNavigator, SystemClock, &'a dyn Confirmer>;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證站點配置
    let site = match load_site_config(config.config.as_deref()) {
        Ok(site) => site,
        Err(e) => exit_with(&e),
    };
    let catalog = match site.catalog() {
        Ok(catalog) => catalog,
        Err(e) => exit_with(&e),
    };

    let auto_confirm = AutoConfirm(true);
    let ask = StdinConfirm;

    let opened = match &config.command {
        Command::Encode { message } => {
            println!("{}", encode_whatsapp_message(message));
            return Ok(());
        }
        Command::Validate { url } => match inspect_whatsapp_url(url) {
            Ok(_) => {
                println!("valid");
                return Ok(());
            }
            Err(rejection) => {
                println!("invalid: {}", rejection);
                exit_with(&ContactError::from(rejection))
            }
        },
        Command::Quick(args) => {
            let mut handler = build_handler(&site, catalog, &auto_confirm);
            handler.handle_quick_button(&args.button())
        }
        Command::Form(args) => {
            let confirmer: &dyn Confirmer = if args.yes { &auto_confirm } else { &ask };
            let mut handler = build_handler(&site, catalog, confirmer);
            submit_form(&mut handler, args)
        }
    };

    if !opened {
        std::process::exit(2);
    }
    Ok(())
}

fn load_site_config(path: Option<&str>) -> velobrava_contact::Result<SiteConfig> {
    let site = match path {
        Some(path) => {
            tracing::info!("📁 Loading site configuration from: {}", path);
            SiteConfig::from_file(path)?
        }
        None => SiteConfig::default(),
    };
    site.validate()?;
    Ok(site)
}

fn build_handler<'a>(site: &SiteConfig, catalog: Catalog, confirmer: &'a dyn Confirmer) -> CliHandler<'a> {
    let limiter = RateLimiter::new(site.cooldown(), SystemClock);
    let opener = SecureOpener::new(limiter, ConsoleNotifier, StdoutNavigator::new());
    ContactHandler::new(catalog, opener, confirmer)
}

fn submit_form(handler: &mut CliHandler<'_>, args: &FormArgs) -> bool {
    let form = args.submission();

    // 指定收件號碼時跳過導遊選擇
    match args.to.as_deref() {
        Some(to) => handler.handle_form_submit_to(&form, to),
        None => handler.handle_form_submit(&form),
    }
}

fn exit_with(e: &ContactError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
