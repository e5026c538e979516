#[tokio::main(flavor = "current_thread")]
async fn main() {
    let result = cloudctl::run().await;
    let error = match result {
        Err(error) => error,
        Ok(0) => return,
        Ok(num) => std::process::exit(num),
    };

    // Provide better error messages for cases where we can provide suggestions to the user.
    if let Some(cloudctl::ResourceNotFound) = error.downcast_ref() {
        eprintln!("{:?}", error);
        eprintln!("Below is a PARTIAL list of likely causes for this error:");
        eprintln!("  * The request was operating on a resource that does not exist (example: a deleted zone)");
        eprintln!("  * The API key in use may not have access to the resource or the service");
        std::process::exit(1);
    }
    if let Some(error) = error.downcast_ref::<cloudctl::ContextNotFound>() {
        eprintln!("{}", error);
        eprintln!(
            "Try configuring it with 'cloudctl --context {} context configure --api-key <KEY>'",
            error.name(),
        );
        std::process::exit(1);
    }
    if let Some(error) = error.downcast_ref::<cloudctl::NoApiKey>() {
        eprintln!("{}", error);
        eprintln!("Set one with 'cloudctl context configure --api-key <KEY>' or the CLOUDCTL_API_KEY variable");
        std::process::exit(1);
    }
    if error.downcast_ref::<cloudctl::LocateError>().is_some() {
        eprintln!("{:#}", error);
        std::process::exit(1);
    }

    // Print the error in detailed format for all other cases.
    eprintln!("{:?}", error);
    std::process::exit(1);
}
