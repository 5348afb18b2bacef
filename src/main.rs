use capacitacion_docente_server::run;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    run().await?;
    Ok(())
}
