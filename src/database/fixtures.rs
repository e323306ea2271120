use super::models::MovieFields;

/// Demo records inserted by the seed operation
pub fn demo_movies() -> Vec<MovieFields> {
    vec![
        MovieFields::new(
            "Harry Potter and the Order of the Phoenix",
            "https://bit.ly/2IcnSwz",
            "Harry Potter and Dumbledore's warning about the return of Lord Voldemort is not heeded by the wizard authorities who, in turn, look to undermine Dumbledore's authority at Hogwarts and discredit Harry.",
        ),
        MovieFields::new(
            "The Lord of the Rings: The Fellowship of the Ring",
            "https://www.google.com/imgres?imgurl=https%3A%2F%2Fm.media-amazon.com%2Fimages%2FM%2FMV5BN2EyZjM3NzUtNWUzMi00MTgxLWI0NTctMzY4M2VlOTdjZWRiXkEyXkFqcGdeQXVyNDUzOTQ5MjY%40._V1_.jpg&imgrefurl=https%3A%2F%2Fwww.imdb.com%2Ftitle%2Ftt0120737%2F&tbnid=6-f04EV6lrjNxM&vet=12ahUKEwiGtO3J94DzAhWMASsKHVS-AcAQMygAegUIARDIAQ..i&docid=EG_nUnHoVl_RiM&w=1978&h=2936&q=lord%20of%20the%20rings&ved=2ahUKEwiGtO3J94DzAhWMASsKHVS-AcAQMygAegUIARDIAQ",
            "A young hobbit, Frodo, who has found the One Ring that belongs to the Dark Lord Sauron, begins his journey with eight companions to Mount Doom, the only place where it can be destroyed.",
        ),
        MovieFields::new(
            "Avengers: Endgame",
            "https://bit.ly/2Pzczlb",
            "Adrift in space with no food or water, Tony Stark sends a message to Pepper Potts as his oxygen supply starts to dwindle. Meanwhile, the remaining Avengers -- Thor, Black Widow, Captain America, and Bruce Banner -- must figure out a way to bring back their vanquished allies for an epic showdown with Thanos -- the evil demigod who decimated the planet and the universe.",
        ),
    ]
}
