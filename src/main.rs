use log::debug;

fn print_usage()
{   eprintln!("Usage: studylm <mode> <text or topic>");
    eprintln!();
    eprintln!("Modes:");
    eprintln!("  summarize   Summarize Text");
    eprintln!("  explain     Explain Concept");
    eprintln!("  questions   Generate Model Questions");
    eprintln!("  quiz        Generate Quiz Questions");
}

fn parse_mode(word: &str) -> Option<studylm::Mode>
{   match word
    {   "summarize" => Some(studylm::Mode::Summarize)
      , "explain" => Some(studylm::Mode::ExplainConcept)
      , "questions" => Some(studylm::Mode::ModelQuestions)
      , "quiz" => Some(studylm::Mode::QuizQuestions)
      , _ => None
    }
}

#[tokio::main]
async fn main()
{   env_logger::init();

    let mut args = std::env::args().skip(1);
    let mode_word = match args.next()
    {   Some(word) => word
      , None => {
          print_usage();
          std::process::exit(2);
        }
    };
    let input = args.collect::<Vec<_>>().join(" ");

    let mode = match parse_mode(&mode_word)
    {   Some(mode) => mode
      , None => {
          eprintln!("Unknown mode: {}", mode_word);
          print_usage();
          std::process::exit(2);
        }
    };

    let api_key = match studylm::config::api_key_from_env()
    {   Ok(key) => key
      , Err(e) => {
          eprintln!("{}", e);
          std::process::exit(1);
        }
    };

    let config = studylm::config::EndpointConfig::default();
    debug!("Using endpoint {}", config.url());

    let backend = match studylm::client::AssistBackend::new(
      config, api_key
    )
    {   Ok(backend) => backend
      , Err(e) => {
          eprintln!("{}", e);
          std::process::exit(1);
        }
    };

    println!("Result: {}", mode.display_name());
    println!();

    let reply = backend.assist(mode, &input).await;
    let _ = backend.shutdown().await;

    match reply
    {   Ok(text) => {
          println!("{}", text);
        }
      , Err(e) => {
          eprintln!("{}", e);
          std::process::exit(1);
        }
    }
}
