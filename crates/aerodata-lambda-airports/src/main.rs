use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    aerodata_lambda_airports::run().await
}
