use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct PlotDoc {
    pub id: i32,
    pub plot_number: String,
    pub title: String,
    pub location: String,
    pub price: String,
    /// Absolute URL of the plot image.
    pub image: String,
}

#[derive(ToSchema)]
pub struct AddPlotFormDoc {
    pub title: String,
    pub location: String,
    pub price: String,
    pub plot_number: String,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[derive(ToSchema)]
pub struct RemovePlotDoc { pub plot_number: String }

#[derive(ToSchema)]
pub struct BookPlotDoc {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cnic: String,
    pub plot_number: String,
}

#[derive(ToSchema)]
pub struct BookingDoc {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cnic: String,
    pub plot_number: String,
    /// Set by the server at creation time.
    #[schema(value_type = String, format = DateTime)]
    pub booking_date: String,
}

#[derive(ToSchema)]
pub struct RemoveBookingDoc { pub id: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::plots::get_plots,
        crate::routes::plots::add_plot,
        crate::routes::plots::remove_plot,
        crate::routes::bookings::book_plot,
        crate::routes::bookings::get_bookings,
        crate::routes::bookings::remove_booking,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            MessageDoc,
            PlotDoc,
            AddPlotFormDoc,
            RemovePlotDoc,
            BookPlotDoc,
            BookingDoc,
            RemoveBookingDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "plots"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;
