use crate::request::Request;
use crate::skill::process_request;
use actix_web::{guard, middleware, web, App, HttpResponse, HttpServer};
use log::{debug, info};

fn index(item: web::Json<Request>) -> HttpResponse {
    info!("Request received...");
    debug!("{:?}", item.0);
    let response = process_request(item.into_inner());
    info!("Sending back response...");
    debug!("{:?}", response);

    HttpResponse::Ok().json(response)
}

pub fn run(bind: &str) -> std::io::Result<()> {
    info!("Starting skill endpoint on {}", bind);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::DefaultHeaders::new().header("X-Version", "0.1"))
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::resource("/").route(
                    web::route()
                        .guard(guard::Header(
                            "content-type",
                            "application/json; charset=utf-8",
                        ))
                        .guard(guard::Post())
                        .to(index),
                ),
            )
    })
    .bind(bind)?
    .workers(1)
    .run()
}
